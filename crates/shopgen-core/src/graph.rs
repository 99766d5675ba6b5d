use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{DatabaseSchema, EntityKind};

/// Summary of FK graph structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FkGraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Report for FK dependency ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FkGraphReport {
    pub summary: FkGraphSummary,
    pub topo_order: Option<Vec<String>>,
    pub cycle: Option<Vec<String>>,
}

/// Build a deterministic FK dependency report for the table catalog.
///
/// Parents come before the tables that reference them in `topo_order`.
pub fn build_fk_graph_report(schema: &DatabaseSchema) -> FkGraphReport {
    let graph = build_adjacency(schema);
    let nodes = graph.len();
    let edges = graph.values().map(|targets| targets.len()).sum();
    let summary = FkGraphSummary { nodes, edges };

    match toposort(&graph) {
        Ok(order) => FkGraphReport {
            summary,
            topo_order: Some(order),
            cycle: None,
        },
        Err(cycle) => FkGraphReport {
            summary,
            topo_order: None,
            cycle: Some(cycle),
        },
    }
}

/// Entity load order: every table after the tables it references.
pub fn load_order(schema: &DatabaseSchema) -> Result<Vec<EntityKind>> {
    let report = build_fk_graph_report(schema);
    let order = match (report.topo_order, report.cycle) {
        (Some(order), _) => order,
        (None, cycle) => return Err(Error::CyclicSchema(cycle.unwrap_or_default().join(", "))),
    };

    order
        .iter()
        .map(|name| {
            EntityKind::from_table_name(name)
                .ok_or_else(|| Error::InvalidSchema(format!("unknown table in catalog: {name}")))
        })
        .collect()
}

fn build_adjacency(schema: &DatabaseSchema) -> BTreeMap<String, BTreeSet<String>> {
    let mut graph: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for table in &schema.tables {
        graph.entry(table.name.clone()).or_default();

        for fk in table.foreign_keys() {
            graph
                .entry(fk.referenced_table.clone())
                .or_default()
                .insert(table.name.clone());
        }
    }

    graph
}

fn toposort(
    graph: &BTreeMap<String, BTreeSet<String>>,
) -> std::result::Result<Vec<String>, Vec<String>> {
    let mut indegree: BTreeMap<String, usize> = BTreeMap::new();

    for node in graph.keys() {
        indegree.entry(node.clone()).or_insert(0);
    }

    for (node, targets) in graph {
        for target in targets {
            let entry = indegree.entry(target.clone()).or_insert(0);
            *entry += 1;
        }
        indegree.entry(node.clone()).or_insert(0);
    }

    let mut ready: BTreeSet<String> = indegree
        .iter()
        .filter_map(|(node, count)| {
            if *count == 0 {
                Some(node.clone())
            } else {
                None
            }
        })
        .collect();

    let mut order = Vec::with_capacity(graph.len());
    let mut indegree = indegree;

    while let Some(node) = ready.iter().next().cloned() {
        ready.remove(&node);
        order.push(node.clone());

        if let Some(targets) = graph.get(&node) {
            for target in targets {
                if let Some(count) = indegree.get_mut(target) {
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        ready.insert(target.clone());
                    }
                }
            }
        }
    }

    if order.len() == graph.len() {
        Ok(order)
    } else {
        let cycle_nodes: Vec<String> = indegree
            .into_iter()
            .filter_map(|(node, count)| if count > 0 { Some(node) } else { None })
            .collect();
        Err(cycle_nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Constraint;
    use crate::schema::{Column, Table, ecommerce_schema};
    use crate::types::ColumnType;

    fn table(name: &str, constraints: Vec<Constraint>) -> Table {
        Table {
            name: name.to_string(),
            columns: vec![Column {
                name: "id".to_string(),
                column_type: ColumnType::Integer,
                is_nullable: false,
            }],
            constraints,
        }
    }

    #[test]
    fn toposort_reports_cycle() {
        let schema = DatabaseSchema {
            tables: vec![
                table("a", vec![Constraint::foreign_key("id", "b", "id")]),
                table("b", vec![Constraint::foreign_key("id", "a", "id")]),
            ],
        };

        let report = build_fk_graph_report(&schema);
        assert!(report.topo_order.is_none());
        assert_eq!(report.cycle, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(matches!(load_order(&schema), Err(Error::CyclicSchema(_))));
    }

    #[test]
    fn load_order_puts_parents_first() {
        let order = load_order(&ecommerce_schema()).expect("acyclic catalog");
        assert_eq!(order.len(), 5);

        let position = |kind: EntityKind| order.iter().position(|item| *item == kind).unwrap();
        assert!(position(EntityKind::Customers) < position(EntityKind::Orders));
        assert!(position(EntityKind::Orders) < position(EntityKind::OrderItems));
        assert!(position(EntityKind::Products) < position(EntityKind::OrderItems));
        assert!(position(EntityKind::Orders) < position(EntityKind::Payments));
    }

    #[test]
    fn summary_counts_foreign_key_edges() {
        let report = build_fk_graph_report(&ecommerce_schema());
        assert_eq!(report.summary.nodes, 5);
        assert_eq!(report.summary.edges, 4);
    }
}
