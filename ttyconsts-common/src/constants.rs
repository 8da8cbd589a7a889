// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use libc::{
    ECHO, ICANON, ICRNL, IEXTEN, IGNCR, INLCR, ISIG, IXOFF, IXON, TCSANOW, VERASE, VMIN, VTIME,
};

/// A single platform terminal-control symbol and its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermConstant {
    pub name: &'static str,
    pub value: i64,
}

impl TermConstant {
    #[must_use]
    pub const fn new(name: &'static str, value: i64) -> Self {
        Self { name, value }
    }
}

/// Which of the two fixed constant lists to report.
///
/// `Minimal` is the historical short list; `Full` adds the input
/// carriage-return/newline translation flags between `IXOFF` and `ECHO`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportVariant {
    Minimal,
    #[default]
    Full,
}

impl ReportVariant {
    /// The ordered list of constants for this variant. Order is part of
    /// the report contract and must not change.
    #[must_use]
    // tcflag_t and the c_cc slot indices differ in width and sign across
    // platforms; i64 holds every defined value.
    #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
    pub fn constants(self) -> Vec<TermConstant> {
        let mode_and_input = [
            TermConstant::new("TCSANOW", TCSANOW as i64),
            TermConstant::new("VTIME", VTIME as i64),
            TermConstant::new("VMIN", VMIN as i64),
            TermConstant::new("VERASE", VERASE as i64),
            TermConstant::new("ISIG", ISIG as i64),
            TermConstant::new("ICANON", ICANON as i64),
            TermConstant::new("IXON", IXON as i64),
            TermConstant::new("IXOFF", IXOFF as i64),
        ];
        let translation = [
            TermConstant::new("ICRNL", ICRNL as i64),
            TermConstant::new("INLCR", INLCR as i64),
            TermConstant::new("IGNCR", IGNCR as i64),
        ];
        let echo_and_extensions = [
            TermConstant::new("ECHO", ECHO as i64),
            TermConstant::new("IEXTEN", IEXTEN as i64),
        ];

        let mut list =
            Vec::with_capacity(mode_and_input.len() + translation.len() + echo_and_extensions.len());
        list.extend_from_slice(&mode_and_input);
        if matches!(self, Self::Full) {
            list.extend_from_slice(&translation);
        }
        list.extend_from_slice(&echo_and_extensions);

        list
    }
}
