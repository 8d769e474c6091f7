/*!
Configuration of a context.

All configuration of a context is contained within the context, and procedures read the options they need from the configuration when called.

```rust
# use iengine::config::{Algorithm, Config, Convention};
let mut config = Config::default();
assert_eq!(config.algorithm.value, Algorithm::TT);
assert_eq!(config.convention.value, Convention::Refutation);

config.algorithm.value = "dpll".parse().unwrap();
assert_eq!(config.algorithm.value, Algorithm::DPLL);
```
*/

mod algorithm;
pub use algorithm::Algorithm;

mod config_option;
pub use config_option::ConfigOption;

mod convention;
pub use convention::Convention;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The inference procedure used to answer a query.
    pub algorithm: ConfigOption<Algorithm>,

    /// The use of satisfiability to answer a query, when solving with DPLL.
    pub convention: ConfigOption<Convention>,

    /// Whether forward chaining reports literals still on the agenda as entailed, on finding the query.
    pub agenda_in_entailed: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: ConfigOption {
                name: "algorithm",
                min: Algorithm::MIN,
                max: Algorithm::MAX,
                value: Algorithm::TT,
            },

            convention: ConfigOption {
                name: "convention",
                min: Convention::MIN,
                max: Convention::MAX,
                value: Convention::Refutation,
            },

            agenda_in_entailed: ConfigOption {
                name: "agenda_in_entailed",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
