//! Heuristic signature extraction.
//!
//! Pulls `(return type, name, argument list)` out of a candidate statement
//! without a real C parser. The last parenthesis group is taken as the
//! argument list, then the text before it is scanned backward through a
//! small state machine. Anything that does not look like `... type name
//! (args)` is rejected, silently: most statements in a real header are not
//! function declarations, and the caller just moves on.

use crate::header::types::FunctionDecl;

/// Characters that may appear in a name or type token. `*` is not part of a
/// C identifier, but pointer stars ride along here and are migrated onto the
/// return type afterwards.
fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '*'
}

/// Whitespace as far as the scan is concerned. `\r` is not included; a stray
/// carriage return disqualifies a candidate like any other unexpected
/// character.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Scanner states, in the order they are visited walking backward from the
/// opening parenthesis of the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Whitespace between the name and the argument list
    PreName,
    /// Inside the name token
    Name,
    /// Whitespace between the type and the name
    PreType,
    /// Inside the type token
    Type,
}

/// Verdict of one automaton step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Keep scanning in the given state without capturing the character
    Skip(ScanState),
    /// The character belongs to the name token
    CaptureName,
    /// The character belongs to the type token
    CaptureType,
    /// Signature complete; whatever precedes the type token is not examined
    Accept,
    /// Candidate disqualified
    Reject,
}

/// Transition function for the backward scan.
///
/// The scan halts at the first whitespace before the type token, so earlier
/// words (storage-class keywords, qualifiers, the leading words of a
/// multi-word type) are neither captured nor validated.
fn transition(state: ScanState, c: char) -> Step {
    use ScanState::*;

    match state {
        PreName if is_space(c) => Step::Skip(PreName),
        PreName if is_ident(c) => Step::CaptureName,
        PreName => Step::Reject,

        Name if is_ident(c) => Step::CaptureName,
        Name if is_space(c) => Step::Skip(PreType),
        Name => Step::Reject,

        PreType if is_space(c) => Step::Skip(PreType),
        PreType if is_ident(c) => Step::CaptureType,
        PreType => Step::Reject,

        Type if is_ident(c) => Step::CaptureType,
        Type if is_space(c) => Step::Accept,
        Type => Step::Reject,
    }
}

/// Extract a function signature from one candidate statement.
///
/// Returns `None` for anything the scan cannot read as a declaration. The
/// final parenthesis group is assumed to be the argument list, so trailing
/// calling-convention or attribute parens defeat the heuristic.
pub fn extract_signature(candidate: &str) -> Option<FunctionDecl> {
    let open = candidate.rfind('(')?;
    let close = candidate.rfind(')')?;
    if close < open {
        return None;
    }
    let args_text = &candidate[open..=close];

    // Backward scan over everything before the argument list. Both tokens
    // come out reversed and are flipped after the loop. Running out of input
    // mid-token just ends the scan with what has been captured so far.
    let mut name_rev = String::new();
    let mut type_rev = String::new();
    let mut state = ScanState::PreName;

    for c in candidate[..open].chars().rev() {
        match transition(state, c) {
            Step::Skip(next) => state = next,
            Step::CaptureName => {
                name_rev.push(c);
                state = ScanState::Name;
            }
            Step::CaptureType => {
                type_rev.push(c);
                state = ScanState::Type;
            }
            Step::Accept => break,
            Step::Reject => return None,
        }
    }

    let mut name: String = name_rev.chars().rev().collect();
    let mut return_type: String = type_rev.chars().rev().collect();

    // C lets a pointer return type hang its stars on the name instead:
    // `T *f()`, `T* f()` and `T * f()` all declare the same function. Fold
    // leading stars back onto the type so every spelling comes out the same.
    loop {
        match name.chars().next() {
            Some('*') => {
                name.remove(0);
                return_type.push('*');
            }
            Some(c) if is_space(c) => {
                name.remove(0);
            }
            _ => break,
        }
    }

    if name.is_empty() {
        return None;
    }

    Some(FunctionDecl::new(return_type, name, args_text))
}
