/*!
A (partial) function from symbols to truth values.

If all symbols are assigned a value the model is 'complete', otherwise the model is 'partial'.

Symbols are kept in alphabetical order, so iteration, rendering and comparison of models are deterministic.

```rust
# use iengine::structures::model::Model;
let mut model = Model::unassigned(["b", "a"]);
model.set("b", true);

assert_eq!(model.value_of("a"), Some(None));
assert_eq!(model.value_of("b"), Some(Some(true)));
assert_eq!(model.value_of("c"), None);
assert_eq!(model.to_string(), "a: None | b: True");
```
*/

use std::collections::BTreeMap;

/// An alphabetically ordered map from symbols to an optional value.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Model {
    values: BTreeMap<String, Option<bool>>,
}

impl Model {
    /// A model on the given symbols, with no symbol assigned a value.
    pub fn unassigned<S: Into<String>>(symbols: impl IntoIterator<Item = S>) -> Self {
        Model {
            values: symbols.into_iter().map(|s| (s.into(), None)).collect(),
        }
    }

    /// A model with exactly the given assignments.
    pub fn from_values(values: impl IntoIterator<Item = (String, bool)>) -> Self {
        Model {
            values: values
                .into_iter()
                .map(|(name, value)| (name, Some(value)))
                .collect(),
        }
    }

    /// Some value of a symbol on the model, or otherwise nothing.
    /// The outer option is none if the symbol is not part of the model.
    pub fn value_of(&self, symbol: &str) -> Option<Option<bool>> {
        self.values.get(symbol).copied()
    }

    /// The value of a symbol, if the symbol is part of the model and has some value.
    pub fn assigned(&self, symbol: &str) -> Option<bool> {
        self.values.get(symbol).copied().flatten()
    }

    /// Sets the value of the symbol, adding the symbol to the model if needed.
    pub fn set(&mut self, symbol: &str, value: bool) {
        match self.values.get_mut(symbol) {
            Some(slot) => *slot = Some(value),
            None => {
                self.values.insert(symbol.to_owned(), Some(value));
            }
        }
    }

}

/// The capitalised form of a value, matching the constants of the input language.
pub fn value_string(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "True",
        Some(false) => "False",
        None => "None",
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self
            .values
            .iter()
            .map(|(symbol, value)| format!("{symbol}: {}", value_string(*value)))
            .collect::<Vec<_>>();
        write!(f, "{}", pairs.join(" | "))
    }
}
