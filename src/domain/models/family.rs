//! Domain model for a family: a wedded couple plus any admitted children.

use tracing::warn;

use crate::domain::models::job::ANNUAL_WORK_HOURS;
use crate::domain::models::person::Person;

/// An ordered household. The founding spouses sit at indices 0 and 1; children
/// are appended after them.
#[derive(Debug, Clone)]
pub struct Family {
    members: Vec<Person>,
}

impl Family {
    /// Wed two currently-unmarried people and found a two-member family.
    ///
    /// If either input already has a spouse, nothing is linked and the family
    /// is left with no members — a silent no-op state, not an error. The
    /// wedding itself goes through the age-gated spouse setter, so an
    /// underage spouse stays unlinked even though the family is formed.
    pub fn new(spouse1: &Person, spouse2: &Person) -> Self {
        if spouse1.spouse().is_some() || spouse2.spouse().is_some() {
            warn!("cannot form family: at least one partner is already married");
            return Family { members: Vec::new() };
        }

        spouse1.set_spouse(Some(spouse2.clone()));
        spouse2.set_spouse(Some(spouse1.clone()));

        Family {
            members: vec![spouse1.clone(), spouse2.clone()],
        }
    }

    /// Admit a child into the family.
    ///
    /// Succeeds only when both founding spouses are adults; the child's own
    /// age is irrelevant, and members admitted later are never re-checked.
    /// Calling this on a family with no members panics, matching the fatal
    /// behavior of asking an unformed family to take a child.
    pub fn have_child(&mut self, child: &Person) -> bool {
        if self.members[0].is_adult() && self.members[1].is_adult() {
            self.members.push(child.clone());
            true
        } else {
            warn!("cannot admit child: both spouses must be adults");
            false
        }
    }

    /// Total yearly income across all members, each at the assumed
    /// [`ANNUAL_WORK_HOURS`] basis. Members without a job contribute nothing.
    pub fn household_income(&self) -> u64 {
        self.members
            .iter()
            .filter_map(|member| member.job())
            .map(|job| job.calculate_income(ANNUAL_WORK_HOURS))
            .sum()
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }
}
