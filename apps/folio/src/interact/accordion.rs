//! Single-open company accordion.
//!
//! Invariant: at most one `.company` lacks the `collapsed` class. Activating
//! a company collapses every other company and then flips its own state, so
//! all companies may end up collapsed but never two open.

use crate::dom::{Document, NodeId, SelectorError};

pub const COLLAPSED: &str = "collapsed";
const COMPANY: &str = ".company";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyState {
    Open,
    Collapsed,
}

/// First company open, every other company collapsed.
pub fn initialize(doc: &mut Document) -> Result<(), SelectorError> {
    for (index, company) in doc.query_selector_all(COMPANY)?.into_iter().enumerate() {
        if index != 0 {
            doc.add_class(company, COLLAPSED);
        }
    }
    Ok(())
}

/// Header or toggle activated somewhere inside a company.
pub fn activate(doc: &mut Document, control: NodeId) -> Result<(), SelectorError> {
    let Some(company) = doc.closest(control, COMPANY)? else {
        return Ok(());
    };
    let was_collapsed = doc.has_class(company, COLLAPSED);

    for other in doc.query_selector_all(COMPANY)? {
        if other != company {
            doc.add_class(other, COLLAPSED);
        }
    }

    if was_collapsed {
        doc.remove_class(company, COLLAPSED);
    } else {
        doc.add_class(company, COLLAPSED);
    }
    Ok(())
}

/// State of every company in document order.
pub fn states(doc: &Document) -> Result<Vec<CompanyState>, SelectorError> {
    Ok(doc
        .query_selector_all(COMPANY)?
        .into_iter()
        .map(|company| {
            if doc.has_class(company, COLLAPSED) {
                CompanyState::Collapsed
            } else {
                CompanyState::Open
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Experience;
    use crate::render::experience;
    use crate::skeleton;
    use CompanyState::{Collapsed, Open};

    fn rendered(companies: usize) -> Document {
        let mut doc = skeleton::main_page();
        let companies: Vec<_> = (0..companies)
            .map(|i| serde_json::json!({"name": format!("Company {i}"), "jobs": []}))
            .collect();
        let experience: Experience =
            serde_json::from_value(serde_json::json!({ "companies": companies })).unwrap();
        experience::mount(&mut doc, &experience).unwrap();
        initialize(&mut doc).unwrap();
        doc
    }

    fn header(doc: &Document, index: usize) -> NodeId {
        doc.query_selector_all(".company-header").unwrap()[index]
    }

    #[test]
    fn test_initial_state_first_open() {
        let doc = rendered(3);
        assert_eq!(states(&doc).unwrap(), vec![Open, Collapsed, Collapsed]);
    }

    #[test]
    fn test_opening_another_collapses_the_first() {
        let mut doc = rendered(3);
        let target = header(&doc, 2);
        activate(&mut doc, target).unwrap();
        assert_eq!(states(&doc).unwrap(), vec![Collapsed, Collapsed, Open]);
    }

    #[test]
    fn test_activating_open_company_collapses_all() {
        let mut doc = rendered(2);
        let target = header(&doc, 0);
        activate(&mut doc, target).unwrap();
        assert_eq!(states(&doc).unwrap(), vec![Collapsed, Collapsed]);
        activate(&mut doc, target).unwrap();
        assert_eq!(states(&doc).unwrap(), vec![Open, Collapsed]);
    }

    #[test]
    fn test_at_most_one_open_after_any_sequence() {
        // Every activation sequence of length 4 over 3 companies.
        let companies: usize = 3;
        for mut code in 0..companies.pow(4) {
            let mut doc = rendered(companies);
            for _ in 0..4 {
                let target = header(&doc, code % companies);
                code /= companies;
                activate(&mut doc, target).unwrap();
                let open = states(&doc)
                    .unwrap()
                    .into_iter()
                    .filter(|s| *s == Open)
                    .count();
                assert!(open <= 1);
            }
        }
    }

    #[test]
    fn test_initialize_without_companies_is_noop() {
        let mut doc = skeleton::main_page();
        initialize(&mut doc).unwrap();
        assert!(states(&doc).unwrap().is_empty());
    }
}
