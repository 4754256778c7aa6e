//! # Household Finance
//!
//! In-memory personal-finance domain model:
//! - [`Money`]: currency-tagged values with fixed-rate conversion pivoting
//!   through USD
//! - [`Job`]: hourly or salaried compensation with raises and annualization
//! - [`Person`]: identity plus age-gated job and spouse links
//! - [`Family`]: a wedded couple, admitted children, and household income
//!
//! Two failure policies coexist and are kept distinct: currency problems are
//! reported loudly through [`MoneyError`], while domain-rule violations (the
//! age gate, the marital precondition) are swallowed by design — they log a
//! warning and leave the model unchanged.
//!
//! Everything is synchronous and single-threaded; callers exposing these
//! types across threads must serialize access externally.

pub mod domain;

pub use domain::models::family::Family;
pub use domain::models::job::{Compensation, Job, ANNUAL_WORK_HOURS};
pub use domain::models::money::{Money, MoneyError, SUPPORTED_CURRENCIES};
pub use domain::models::person::{Person, ADULT_AGE};
