//! Allow-list check of container images against image prefixes
//!
//! Parameters: `{"imagePrefix": ["registry.example/"]}`
//!
//! Every (image, prefix) pair overwrites the decision, so the result is the
//! match of the last image against the last prefix. A pod with no images, or
//! an empty prefix list, is rejected.

use policy_sdk::prelude::*;

export_policy!(strategy: MatchStrategy::PositivePrefixOverList {
    candidates: "spec.containers.#.image",
    prefixes: "imagePrefix",
});
