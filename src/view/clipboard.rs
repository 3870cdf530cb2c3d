// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal clipboard writes via OSC 52.
//!
//! The card copy action emits an OSC 52 sequence on stdout; terminals
//! with clipboard support (most modern emulators) place the payload on
//! the system clipboard. Terminals without it ignore the sequence, so
//! the action degrades to a no-op rather than an error.

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;

/// `ESC ] 52 ; c ; <base64 payload> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Write `text` to the terminal clipboard through `out`.
pub fn copy(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_well_formed() {
        let seq = osc52_sequence("Hello.");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
    }

    #[test]
    fn payload_decodes_back_to_text() {
        let text = "ما اسمك؟";
        let seq = osc52_sequence(text);
        let payload = &seq["\x1b]52;c;".len()..seq.len() - 1];
        let decoded = STANDARD.decode(payload).expect("valid base64");
        assert_eq!(String::from_utf8(decoded).expect("utf8"), text);
    }

    #[test]
    fn copy_writes_the_sequence() {
        let mut buf = Vec::new();
        copy(&mut buf, "Blue").expect("copy");
        assert_eq!(buf, osc52_sequence("Blue").into_bytes());
    }
}
