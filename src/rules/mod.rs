//! Rule implementations.
//!
//! Each module is an independent check over the shared analysis context.
//! Call-site rules fan out from the classified `CallSite` values; the table
//! rules (`duplicate_value`, `key_convention`) are pure functions over an
//! accessor and its default-culture table.
//!
//! ## Module Structure
//!
//! - `helpers`: shared lookup/suppression plumbing
//! - `key_exists`: key has no matching accessor member
//! - `symbolic_key`: literal or non-symbolic key instead of `nameof`
//! - `prefer_wrapper`: generic translate call where a wrapper exists
//! - `member_access`: raw accessor member bypassing the wrapper
//! - `duplicate_value`: identical values in the default table
//! - `key_convention`: member name does not match its value-derived name
//! - `orphan_key`: keys in culture variants outside the default universe
//! - `interpolation`: format placeholders in non-interpolated literals

pub mod duplicate_value;
pub mod helpers;
pub mod interpolation;
pub mod key_convention;
pub mod key_exists;
pub mod member_access;
pub mod orphan_key;
pub mod prefer_wrapper;
pub mod symbolic_key;

pub use duplicate_value::check_duplicate_values;
pub use interpolation::check_format_literals;
pub use key_convention::check_key_convention;
pub use key_exists::check_missing_keys;
pub use member_access::check_raw_resource;
pub use orphan_key::check_culture_orphans;
pub use prefer_wrapper::check_prefer_wrapper;
pub use symbolic_key::check_literal_keys;
