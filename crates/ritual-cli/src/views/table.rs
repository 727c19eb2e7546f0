use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use ritual_core::models::{LifeTemplate, MacroTaskTemplate, Task, TaskKind, TaskStatus};

fn kind_label(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::FixedEvent => "fixed",
        TaskKind::WindowBased => "window",
    }
}

pub fn display_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Kind", "Status", "Starts", "Recurring"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.id.to_string()[..7]));

        let mut display_title = String::new();
        if task.recurring_marker.is_some() {
            display_title.push('↻');
            display_title.push(' ');
        }
        display_title.push_str(&task.title);

        let mut title_cell = Cell::new(display_title);
        match task.status {
            TaskStatus::Completed | TaskStatus::Cancelled => {
                title_cell = title_cell
                    .add_attribute(Attribute::CrossedOut)
                    .fg(Color::DarkGrey);
            }
            TaskStatus::Pending => {}
        }
        row.add_cell(title_cell);

        row.add_cell(Cell::new(kind_label(task.kind)));

        let mut status_cell = Cell::new(format!("{:?}", task.status));
        status_cell = match task.status {
            TaskStatus::Completed => status_cell.fg(Color::Green),
            TaskStatus::Cancelled => status_cell.fg(Color::DarkGrey),
            TaskStatus::Pending => status_cell,
        };
        row.add_cell(status_cell);

        row.add_cell(Cell::new(
            task.start_at
                .map(|at| at.humanize())
                .unwrap_or_else(|| "None".to_string()),
        ));

        row.add_cell(Cell::new(task.recurring_marker.as_deref().unwrap_or("")));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_templates(life: Option<&LifeTemplate>, macros: &[MacroTaskTemplate]) {
    let fixed_events = life.map(|l| l.fixed_events.as_slice()).unwrap_or(&[]);
    if fixed_events.is_empty() && macros.is_empty() {
        println!("No templates stored.");
        return;
    }

    if let Some(life) = life {
        println!("Life template: wake {} / sleep {}", life.wake_up, life.sleep);
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Type", "Schedule", "Rule", "Enabled"]);

    for event in fixed_events {
        let mut row = Row::new();
        row.add_cell(Cell::new(&event.id));
        row.add_cell(Cell::new(&event.name));
        row.add_cell(Cell::new("life event"));
        row.add_cell(Cell::new(format!(
            "{} for {}m",
            event.start_time, event.duration_minutes
        )));
        row.add_cell(Cell::new(event.rule.to_string()));
        row.add_cell(enabled_cell(event.enabled));
        table.add_row(row);
    }

    for template in macros {
        let mut row = Row::new();
        row.add_cell(Cell::new(&template.id));
        row.add_cell(Cell::new(&template.title));
        row.add_cell(Cell::new(format!("macro ({})", template.cadence)));
        row.add_cell(Cell::new(format!("{}m in window", template.estimated_minutes)));
        row.add_cell(Cell::new(template.rule.to_string()));
        row.add_cell(enabled_cell(template.enabled));
        table.add_row(row);
    }

    println!("{table}");
}

fn enabled_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::DarkGrey)
    }
}
