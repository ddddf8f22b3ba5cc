use replay_core::model::SessionId;
use services::CategoryGroup;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCardVm {
    pub name: String,
    pub count_label: String,
    pub first_session: Option<SessionId>,
}

impl From<&CategoryGroup> for CategoryCardVm {
    fn from(group: &CategoryGroup) -> Self {
        Self {
            name: group.category.to_string(),
            count_label: count_label(group.len()),
            first_session: group.first_session_id().cloned(),
        }
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 session available".to_string()
    } else {
        format!("{count} sessions available")
    }
}

#[must_use]
pub fn map_category_cards(groups: &[CategoryGroup]) -> Vec<CategoryCardVm> {
    groups.iter().map(CategoryCardVm::from).collect()
}
