use crate::model::contribution::{Contribution, ContributionPatch};

/// Two slices of the same entity: the community feed and the caller's own
/// submissions. Plain replace-or-append-by-id semantics; updates and deletes
/// are applied to both slices so they never disagree about an id.
#[derive(Debug, Default)]
pub struct ContributionStore {
    contributions: Vec<Contribution>,
    mine: Vec<Contribution>,
}

fn apply_patch(c: &mut Contribution, patch: &ContributionPatch) {
    if let Some(title) = &patch.title {
        c.title = title.clone();
    }
    if let Some(description) = &patch.description {
        c.description = description.clone();
    }
    if let Some(content) = &patch.content {
        c.content = Some(content.clone());
    }
    if let Some(tags) = &patch.tags {
        c.tags = tags.clone();
    }
    if let Some(status) = patch.status {
        c.status = status;
    }
    if let Some(credits) = patch.credits {
        c.credits = credits;
    }
}

impl ContributionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn mine(&self) -> &[Contribution] {
        &self.mine
    }

    #[allow(dead_code)]
    pub fn set_contributions(&mut self, contributions: Vec<Contribution>) {
        self.contributions = contributions;
    }

    pub fn set_mine(&mut self, contributions: Vec<Contribution>) {
        self.mine = contributions;
    }

    pub fn add(&mut self, contribution: Contribution) {
        self.contributions.push(contribution);
    }

    pub fn add_mine(&mut self, contribution: Contribution) {
        self.mine.push(contribution);
    }

    pub fn update(&mut self, id: &str, patch: &ContributionPatch) -> bool {
        let mut found = false;
        for c in self.contributions.iter_mut().filter(|c| c.id == id) {
            apply_patch(c, patch);
            found = true;
        }
        for c in self.mine.iter_mut().filter(|c| c.id == id) {
            apply_patch(c, patch);
            found = true;
        }
        found
    }

    pub fn bump_upvotes(&mut self, id: &str) -> bool {
        let mut found = false;
        for c in self.contributions.iter_mut().filter(|c| c.id == id) {
            c.upvotes += 1;
            found = true;
        }
        for c in self.mine.iter_mut().filter(|c| c.id == id) {
            c.upvotes += 1;
            found = true;
        }
        found
    }

    #[allow(dead_code)]
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.contributions.len() + self.mine.len();
        self.contributions.retain(|c| c.id != id);
        self.mine.retain(|c| c.id != id);
        self.contributions.len() + self.mine.len() != before
    }
}
