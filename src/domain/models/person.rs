//! Domain model for a person: identity plus age-gated job and spouse links.
//!
//! People are shared handles rather than plain values because the spouse
//! relation is a mutual back-reference (A points at B and B at A). The model
//! is single-threaded by design, so the handle is an `Rc`, not an `Arc`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::warn;

use crate::domain::models::job::Job;

/// Minimum age for holding a job or marrying.
pub const ADULT_AGE: u32 = 18;

struct PersonData {
    first_name: String,
    last_name: Option<String>,
    age: u32,
    job: Option<Job>,
    spouse: Option<Person>,
}

/// Cheaply clonable handle to a person.
///
/// The job and spouse fields start unset and are guarded by the age gate:
/// assignments on a minor are silently discarded (logged, never an error).
#[derive(Clone)]
pub struct Person(Rc<RefCell<PersonData>>);

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: Option<String>, age: u32) -> Self {
        Person(Rc::new(RefCell::new(PersonData {
            first_name: first_name.into(),
            last_name,
            age,
            job: None,
            spouse: None,
        })))
    }

    pub fn first_name(&self) -> String {
        self.0.borrow().first_name.clone()
    }

    pub fn last_name(&self) -> Option<String> {
        self.0.borrow().last_name.clone()
    }

    pub fn age(&self) -> u32 {
        self.0.borrow().age
    }

    pub fn job(&self) -> Option<Job> {
        self.0.borrow().job.clone()
    }

    pub fn spouse(&self) -> Option<Person> {
        self.0.borrow().spouse.clone()
    }

    pub fn is_adult(&self) -> bool {
        self.age() >= ADULT_AGE
    }

    /// Assign (or clear) this person's job.
    ///
    /// Minors cannot hold a job: the assignment is discarded, the field
    /// becomes/remains `None`, and `false` is returned. Adults always get the
    /// value applied and `true` back.
    pub fn set_job(&self, job: Option<Job>) -> bool {
        let mut data = self.0.borrow_mut();
        if data.age >= ADULT_AGE {
            data.job = job;
            true
        } else {
            warn!(
                first_name = %data.first_name,
                age = data.age,
                "cannot assign job: person is too young"
            );
            data.job = None;
            false
        }
    }

    /// Assign (or clear) this person's spouse, under the same age gate as
    /// [`Person::set_job`]. The link is one-directional; only the Family
    /// constructor weds two people mutually.
    pub fn set_spouse(&self, spouse: Option<Person>) -> bool {
        let mut data = self.0.borrow_mut();
        if data.age >= ADULT_AGE {
            data.spouse = spouse;
            true
        } else {
            warn!(
                first_name = %data.first_name,
                age = data.age,
                "cannot assign spouse: person is too young"
            );
            data.spouse = None;
            false
        }
    }

    /// "First Last", or just the first name when there is no last name.
    pub fn full_name(&self) -> String {
        let data = self.0.borrow();
        match &data.last_name {
            Some(last) => format!("{} {}", data.first_name, last),
            None => data.first_name.clone(),
        }
    }

    /// Render in the fixed format downstream callers match byte-for-byte.
    /// Absent lastName/job/spouse render the literal `nil`; the job renders
    /// by title only.
    pub fn describe(&self) -> String {
        let data = self.0.borrow();
        let last_name = data.last_name.as_deref().unwrap_or("nil");
        let job = data
            .job
            .as_ref()
            .map(|job| job.title.as_str())
            .unwrap_or("nil");
        let spouse = data
            .spouse
            .as_ref()
            .map(Person::full_name)
            .unwrap_or_else(|| "nil".to_string());

        format!(
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            data.first_name, last_name, data.age, job, spouse
        )
    }

    /// Whether two handles point at the same person.
    pub fn same_person(&self, other: &Person) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// Manual impl: deriving Debug would recurse forever through a wedded pair's
// mutual spouse links.
impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
