use crate::models::{MenuItem, Nutrient};

/// How a query string is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Id(u64),
    Name(String),
}

impl Query {
    /// Numeric queries become id lookups only when ids are available.
    pub fn parse(raw: &str, ids_available: bool) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<u64>() {
            Ok(id) if ids_available => Some(Query::Id(id)),
            _ => Some(Query::Name(trimmed.to_lowercase())),
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Query::Id(id) => item.item_id == Some(*id),
            Query::Name(needle) => item.item.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Filter `(row, item)` pairs by a raw query string.
pub fn search_rows<'a, I>(rows: I, raw: &str, ids_available: bool) -> Vec<(usize, &'a MenuItem)>
where
    I: IntoIterator<Item = (usize, &'a MenuItem)>,
{
    let Some(query) = Query::parse(raw, ids_available) else {
        return Vec::new();
    };
    rows.into_iter()
        .filter(|(_, item)| query.matches(item))
        .collect()
}

/// Stable sort by one nutrient. Items without a value always sort last.
pub fn sort_by_nutrient(rows: &mut [(usize, &MenuItem)], nutrient: Nutrient, ascending: bool) {
    rows.sort_by(|(_, a), (_, b)| match (a.nutrient(nutrient), b.nutrient(nutrient)) {
        (Some(x), Some(y)) => {
            let ord = x.total_cmp(&y);
            if ascending { ord } else { ord.reverse() }
        }
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
