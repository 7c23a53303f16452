//! Renders task profiles as tables, one row per plan node.

use prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE;
use prettytable::Table;

use crate::operator::{PhysicalOperator, ReaderKind};
use crate::plan::PlanNode;
use crate::task::TaskProfile;

const ROOT: &str = "root";
const COP_INDEX: &str = "cop[index]";
const COP_TABLE: &str = "cop[table]";

impl TaskProfile {
    pub fn explain(&self) -> String {
        let mut table = Table::new();
        table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row!["id", "operator", "task"]);

        match self {
            TaskProfile::Cop(task) => {
                if let Some(plan) = task.table_plan() {
                    add_rows(&mut table, plan, 0, COP_TABLE);
                }
                if let Some(plan) = task.index_plan() {
                    add_rows(&mut table, plan, 0, COP_INDEX);
                }
            }
            TaskProfile::Root(task) => add_rows(&mut table, task.plan(), 0, ROOT),
        }

        table.add_row(row![
            "",
            format!("cost: {}, count: {}", self.cost(), self.count()),
            self.kind()
        ]);
        table.to_string()
    }
}

fn add_rows(table: &mut Table, node: &PlanNode, depth: usize, task: &'static str) {
    table.add_row(row![
        node.id(),
        format!("{}{}", "  ".repeat(depth), node.operator()),
        task
    ]);

    let reader_kind = match node.operator() {
        PhysicalOperator::PhysicalReader(reader) => Some(reader.kind()),
        _ => None,
    };
    for (idx, input) in node.inputs().iter().enumerate() {
        let input_task = match (reader_kind, idx) {
            (Some(ReaderKind::TableReader), _) => COP_TABLE,
            (Some(ReaderKind::IndexReader), _) => COP_INDEX,
            (Some(ReaderKind::IndexLookUpReader), 0) => COP_INDEX,
            (Some(ReaderKind::IndexLookUpReader), _) => COP_TABLE,
            (None, _) => task,
        };
        add_rows(table, input, depth + 1, input_task);
    }
}
