use crate::model::resource::{Resource, ResourceFilter};

/// Collection plus filter criteria. The filtered view is recomputed from the
/// live collection on every read, so mutations are always reflected without
/// the caller having to re-apply the filter.
#[derive(Debug, Default)]
pub struct ResourceStore {
    resources: Vec<Resource>,
    filter: ResourceFilter,
}

/// AND over the supplied predicates; an absent predicate passes. The search
/// query is a case-insensitive substring match on title OR description, and
/// the tag predicate passes when the intersection is non-empty.
pub fn matches_filter(filter: &ResourceFilter, resource: &Resource) -> bool {
    if let Some(course_id) = &filter.course_id {
        if &resource.course_id != course_id {
            return false;
        }
    }
    if let Some(kind) = filter.kind {
        if resource.kind != kind {
            return false;
        }
    }
    if let Some(tags) = &filter.tags {
        if !tags.iter().any(|t| resource.tags.contains(t)) {
            return false;
        }
    }
    if let Some(query) = &filter.search_query {
        let q = query.to_lowercase();
        if !resource.title.to_lowercase().contains(&q)
            && !resource.description.to_lowercase().contains(&q)
        {
            return false;
        }
    }
    true
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn set_resources(&mut self, resources: Vec<Resource>) {
        self.resources = resources;
    }

    pub fn add(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// Applies `apply` to the matching resource; returns false if the id is
    /// unknown.
    #[allow(dead_code)]
    pub fn update(&mut self, id: &str, apply: impl FnOnce(&mut Resource)) -> bool {
        match self.resources.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                apply(r);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != id);
        self.resources.len() != before
    }

    pub fn set_filter(&mut self, filter: ResourceFilter) {
        self.filter = filter;
    }

    /// Convenience path: replaces the whole filter with just a search query.
    pub fn search(&mut self, query: &str) {
        self.filter = ResourceFilter {
            search_query: Some(query.to_string()),
            ..ResourceFilter::default()
        };
    }

    pub fn filtered(&self) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| matches_filter(&self.filter, r))
            .collect()
    }
}
