/*
 *   Copyright (c) 2024 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::io::{Error, ErrorKind, Result, Write};

use crate::keypress::{KeyPress, KeyPressReader};

/// A [`Write`] that collects everything into a string, so tests can make
/// assertions about what was painted.
#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    pub fn new() -> Self { Self::default() }

    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let string = std::str::from_utf8(buf)
            .map_err(|error| Error::new(ErrorKind::InvalidData, error))?;
        self.buffer.push_str(string);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Replays a scripted sequence of keypresses, wrapping around at the end.
#[derive(Debug)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<KeyPress>,
    pub index: Option<usize>,
}

impl TestVecKeyPressReader {
    pub fn new(key_press_vec: Vec<KeyPress>) -> Self {
        Self {
            key_press_vec,
            index: None,
        }
    }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> KeyPress {
        // Increment index every time this method is called until the end of
        // the vector, then wrap around.
        match self.index {
            Some(index) if index < self.key_press_vec.len() - 1 => {
                self.index = Some(index + 1);
            }
            Some(_) => {
                self.index = Some(0);
            }
            None => {
                self.index = Some(0);
            }
        }

        let index = self.index.unwrap_or(0);
        self.key_press_vec[index].clone()
    }
}

/// True when the string contains at least one ANSI escape sequence.
pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|it| it == '\x1b')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn string_writer_collects_writes() {
        let mut writer = TestStringWriter::new();
        writer.write_all(b"hello ").unwrap();
        writer.write_all("world".as_bytes()).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.get_buffer(), "hello world");
    }

    #[test]
    fn vec_reader_replays_and_wraps_around() {
        let mut reader =
            TestVecKeyPressReader::new(vec![KeyPress::Down, KeyPress::Enter]);
        assert_eq!(reader.read_key_press(), KeyPress::Down);
        assert_eq!(reader.read_key_press(), KeyPress::Enter);
        assert_eq!(reader.read_key_press(), KeyPress::Down);
    }

    #[test]
    fn ansi_detection() {
        assert!(contains_ansi_escape_sequence("\x1b[31mred\x1b[0m"));
        assert!(!contains_ansi_escape_sequence("plain text"));
    }
}
