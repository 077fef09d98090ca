use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{pad_right, visible_width};
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String, &str)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let color = color_for_operation(&e.operation);
                let op_target = if e.target.is_empty() {
                    color.paint(e.operation.as_str()).to_string()
                } else {
                    format!(
                        "{} ({})",
                        color.paint(e.operation.as_str()),
                        truncate(&e.target, MAX_OP_WIDTH)
                    )
                };

                (e.id.to_string(), date, op_target, e.message.as_str())
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| visible_width(&r.2)).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for (id, date, op_target, message) in rows {
            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                id,
                date,
                pad_right(&op_target, op_w),
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
