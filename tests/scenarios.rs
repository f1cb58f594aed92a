use std::sync::mpsc;
use std::time::Duration;

use maze_chase::config::Config;
use maze_chase::driver;
use maze_chase::game::{Game, Outcome, Phase};
use maze_chase::ghost::Scripted;
use maze_chase::input::{decode, Key};
use maze_chase::level::{Level, Pos};
use maze_chase::movement::{resolve, Dir};
use maze_chase::render::Renderer;

#[test]
fn eating_the_last_dot_wins() {
    let level = Level::parse("#####\n#P. #\n#   #\n#   #\n#####").unwrap();
    assert_eq!(level.dots, 1);
    let mut game = Game::new(level);
    let mut renderer = Renderer::new(Vec::new(), Config::default());
    let (tx, rx) = mpsc::channel();
    tx.send(Key::Right).unwrap();

    let outcome = driver::run(
        &mut game,
        &mut renderer,
        &rx,
        &mut Scripted::new(vec![Dir::Up]),
        Duration::ZERO,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Cleared);
    assert_eq!(game.player, Pos::new(1, 2));
    assert_eq!(game.score, 1);
    assert_eq!(game.dots_left, 0);
    assert_eq!(game.lives, 1);
}

#[test]
fn ghost_landing_on_player_ends_the_game() {
    let level = Level::parse("#####\n#.  #\n# PG#\n#   #\n#####").unwrap();
    let mut game = Game::new(level);
    assert_eq!(game.player, Pos::new(2, 2));
    assert_eq!(game.lives, 1);

    let phase = game.tick(None, &mut Scripted::new(vec![Dir::Left]));

    assert_eq!(game.ghosts, vec![Pos::new(2, 2)]);
    assert_eq!(game.lives, 0);
    assert_eq!(phase, Phase::GameOver(Outcome::Died));
}

#[test]
fn moving_up_from_the_top_row_wraps() {
    let open = Level::parse("  P  \n     \n     \n     ").unwrap();
    assert_eq!(
        resolve(open.player, Some(Dir::Up), &open.maze),
        Pos::new(3, 2)
    );

    let walled = Level::parse("  P  \n     \n     \n#####").unwrap();
    assert_eq!(
        resolve(walled.player, Some(Dir::Up), &walled.maze),
        Pos::new(0, 2)
    );
}

#[test]
fn raw_bytes_decode_to_keys() {
    assert_eq!(decode(&[0x1b]), Key::Esc);
    assert_eq!(decode(&[0x1b, b'[', b'A']), Key::Up);
    assert_eq!(decode(b"x"), Key::Other);

    let mut game = Game::new(Level::parse("#####\n#P..#\n#####").unwrap());
    let before = game.player;
    game.apply_input(decode(b"x"));
    assert_eq!(game.player, before);
    assert_eq!(game.lives, 1);
}
