//! Rejects pods with any container image that starts with a forbidden prefix
//!
//! Parameters: `{"imagePrefix": ["tom", "registry.example/"]}`

use policy_sdk::prelude::*;

export_policy!(strategy: MatchStrategy::NegatedPrefixOverList {
    candidates: "spec.containers.#.image",
    prefixes: "imagePrefix",
});
