use crate::{
    error::SourceError,
    geo::haversine_miles,
    obs::{self, MetricsEvent, QueryKind},
    predicate::{Predicate, eval},
    schema::{Field, Listing},
    source::{DataSource, Direction, OrderBy, SelectQuery, SelectedListing},
    value::{Value, compare_order},
};
use std::{cmp::Ordering, collections::BTreeSet};

///
/// MemorySource
///
/// Reference `DataSource` over an in-memory row vector. Executes
/// predicates with `predicate::eval`, which makes it the engine's
/// conformance oracle in tests and a serviceable store for small embedded
/// deployments.
///

#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    rows: Vec<Listing>,
}

impl MemorySource {
    #[must_use]
    pub const fn new(rows: Vec<Listing>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn matching<'a>(&'a self, predicate: &Predicate) -> Vec<&'a Listing> {
        obs::record(MetricsEvent::RowsScanned {
            rows: self.rows.len() as u64,
        });

        self.rows.iter().filter(|row| eval(row, predicate)).collect()
    }
}

impl FromIterator<Listing> for MemorySource {
    fn from_iter<I: IntoIterator<Item = Listing>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl DataSource for MemorySource {
    fn count(&self, predicate: &Predicate) -> Result<u64, SourceError> {
        obs::record(MetricsEvent::Query {
            kind: QueryKind::Count,
        });

        Ok(self.matching(predicate).len() as u64)
    }

    fn select(&self, query: &SelectQuery) -> Result<Vec<SelectedListing>, SourceError> {
        obs::record(MetricsEvent::Query {
            kind: QueryKind::Select,
        });

        let mut hits = self.matching(&query.predicate);

        // Stable sorts keep natural row order for ties.
        match query.order {
            OrderBy::Field { field, direction } => {
                hits.sort_by(|a, b| {
                    let ordering = compare_order(&a.value(field), &b.value(field))
                        .unwrap_or(Ordering::Equal);
                    match direction {
                        Direction::Asc => ordering,
                        Direction::Desc => ordering.reverse(),
                    }
                });
            }
            OrderBy::Distance { from } => {
                hits.sort_by(|a, b| {
                    distance_or_max(from, a).total_cmp(&distance_or_max(from, b))
                });
            }
        }

        let offset = query.offset as usize;
        let hits: Vec<&Listing> = if offset >= hits.len() {
            Vec::new()
        } else {
            hits.split_off(offset)
        };

        let mut selected: Vec<SelectedListing> = hits
            .into_iter()
            .map(|row| SelectedListing {
                distance: query.distance_from.and_then(|from| {
                    row.position().map(|point| haversine_miles(from, point))
                }),
                listing: row.clone(),
            })
            .collect();

        if let Some(limit) = query.limit {
            selected.truncate(limit as usize);
        }

        obs::record(MetricsEvent::RowsReturned {
            rows: selected.len() as u64,
        });

        Ok(selected)
    }

    fn distinct(&self, field: Field, predicate: &Predicate) -> Result<Vec<String>, SourceError> {
        obs::record(MetricsEvent::Query {
            kind: QueryKind::Distinct,
        });

        let values: BTreeSet<String> = self
            .matching(predicate)
            .into_iter()
            .filter_map(|row| match row.value(field) {
                Value::Text(text) if !text.is_empty() => Some(text),
                _ => None,
            })
            .collect();

        Ok(values.into_iter().collect())
    }

    fn column(&self, field: Field, predicate: &Predicate) -> Result<Vec<Value>, SourceError> {
        obs::record(MetricsEvent::Query {
            kind: QueryKind::Column,
        });

        Ok(self
            .matching(predicate)
            .into_iter()
            .map(|row| row.value(field))
            .filter(|value| !value.is_null())
            .collect())
    }
}

fn distance_or_max(from: crate::geo::GeoPoint, row: &Listing) -> f64 {
    row.position()
        .map_or(f64::MAX, |point| haversine_miles(from, point))
}
