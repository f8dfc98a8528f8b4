use tabled::settings::Style;
use tabled::{Table, Tabled};
use ttask_core::Priority;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: usize,
    #[tabled(rename = "Task")]
    name: String,
    #[tabled(rename = "Priority")]
    priority: String,
}

/// Prints one task list as a table, numbered in sorted order.
pub fn print_task_table(label: &str, entries: &[(String, Priority)]) {
    if entries.is_empty() {
        println!("No {} tasks.", label);
        return;
    }
    let rows: Vec<TaskRow> = entries
        .iter()
        .enumerate()
        .map(|(idx, (name, priority))| TaskRow {
            id: idx + 1,
            name: name.clone(),
            priority: priority.title_case(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{} tasks:\n{}", label, table);
}
