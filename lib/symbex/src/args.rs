//! Application argument builder.
//!
//! `Args` collects the children for one application of a symbol. Positional
//! and named arguments are mutually exclusive per application; the check
//! happens when the arguments are turned into a parameter binding, before
//! any node is produced.

use symbex_value::{duplicate_argument, mixed_arguments, EvalError};

use crate::symbol::{Params, Symbol};

/// Arguments for one application of a [`Symbol`].
///
/// ```
/// use symbex::{Args, Symbol};
///
/// let args = Args::new()
///     .arg(Symbol::new(1))
///     .arg(Symbol::new(2));
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Args {
    positional: Vec<Symbol>,
    named: Vec<(String, Symbol)>,
}

impl Args {
    /// Empty argument list.
    ///
    /// Applying a symbol to empty `Args` produces a zero-child application
    /// node, which is distinct from a leaf.
    pub fn new() -> Self {
        Args::default()
    }

    /// Positional arguments from an iterator of children.
    pub fn positional(children: impl IntoIterator<Item = Symbol>) -> Self {
        Args {
            positional: children.into_iter().collect(),
            named: Vec::new(),
        }
    }

    /// Named arguments from an iterator of `(name, child)` pairs.
    ///
    /// Declaration order is preserved.
    pub fn named<S: Into<String>>(pairs: impl IntoIterator<Item = (S, Symbol)>) -> Self {
        Args {
            positional: Vec::new(),
            named: pairs
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
        }
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, child: Symbol) -> Self {
        self.positional.push(child);
        self
    }

    /// Append a named argument.
    #[must_use]
    pub fn named_arg(mut self, name: impl Into<String>, child: Symbol) -> Self {
        self.named.push((name.into(), child));
        self
    }

    /// Number of collected arguments.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Whether no arguments were collected.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Convert into a parameter binding.
    ///
    /// Fails if both positional and named arguments are present, or if a
    /// name is bound more than once. Empty arguments become an empty
    /// positional binding.
    pub(crate) fn into_params(self) -> Result<Params, EvalError> {
        if !self.positional.is_empty() && !self.named.is_empty() {
            return Err(mixed_arguments());
        }
        if self.named.is_empty() {
            return Ok(Params::Positional(self.positional));
        }
        for (i, (name, _)) in self.named.iter().enumerate() {
            if self.named[..i].iter().any(|(seen, _)| seen == name) {
                return Err(duplicate_argument(name));
            }
        }
        Ok(Params::Named(self.named))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use symbex_value::EvalErrorKind;

    #[test]
    fn empty_args_become_empty_positional_binding() {
        let params = Args::new().into_params().unwrap_or(Params::Named(vec![]));
        assert!(matches!(params, Params::Positional(children) if children.is_empty()));
    }

    #[test]
    fn mixed_args_are_rejected() {
        let err = Args::new()
            .arg(Symbol::new(1))
            .named_arg("y", Symbol::new(2))
            .into_params()
            .map(|_| ())
            .unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::MixedArguments);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Args::new()
            .named_arg("x", Symbol::new(1))
            .named_arg("x", Symbol::new(2))
            .into_params()
            .map(|_| ())
            .unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::DuplicateArgument {
                name: "x".to_string()
            }
        );
    }
}
