//! Keyboard input channel.
//!
//! A background thread blocks on the raw byte stream and publishes one decoded
//! [`Key`] per read into an unbounded `mpsc` queue. The game loop drains at
//! most one key per tick with [`poll`], which never blocks.

use std::io::Read;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{debug, error, info};

use crate::movement::Dir;

const ESC: u8 = 0x1b;
const READ_BUF: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Esc,
    /// Anything that isn't an arrow or a lone escape.
    Other,
}

impl Key {
    pub fn dir(self) -> Option<Dir> {
        match self {
            Key::Up => Some(Dir::Up),
            Key::Down => Some(Dir::Down),
            Key::Left => Some(Dir::Left),
            Key::Right => Some(Dir::Right),
            Key::Esc | Key::Other => None,
        }
    }
}

/// Decodes the bytes delivered by one raw read.
pub fn decode(bytes: &[u8]) -> Key {
    match bytes {
        [ESC] => Key::Esc,
        [ESC, b'[', code, ..] => match *code {
            b'A' => Key::Up,
            b'B' => Key::Down,
            b'C' => Key::Right,
            b'D' => Key::Left,
            _ => Key::Other,
        },
        _ => Key::Other,
    }
}

/// Starts the producer thread over `source`.
///
/// The thread stops after publishing `Esc` for a failed or exhausted read, or
/// once the receiver is gone. Nothing joins it in the binary; it dies with the
/// process.
pub fn spawn_reader<R>(mut source: R) -> (Receiver<Key>, JoinHandle<()>)
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        info!("input reader started");
        read_keys(&mut source, &tx);
        info!("input reader stopped");
    });
    (rx, handle)
}

fn read_keys(source: &mut impl Read, tx: &Sender<Key>) {
    let mut buf = [0u8; READ_BUF];
    loop {
        let key = match source.read(&mut buf) {
            Ok(0) => {
                info!("input stream closed");
                let _ = tx.send(Key::Esc);
                return;
            }
            Ok(n) => decode(&buf[..n]),
            Err(e) => {
                error!("error reading input: {e}");
                let _ = tx.send(Key::Esc);
                return;
            }
        };
        debug!("key {key:?}");
        if tx.send(key).is_err() {
            return;
        }
    }
}

/// Takes the next queued key without waiting.
pub fn poll(rx: &Receiver<Key>) -> Option<Key> {
    match rx.try_recv() {
        Ok(key) => Some(key),
        Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
    }
}
