//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::mongodbflex::model::{Backup, Flavor, ListStoragesResponse, RestoreJob};
use crate::domain::mongodbflex::restore_status;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl TableRenderer {
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    fn table(headers: &[&str]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                headers
                    .iter()
                    .map(|h| Cell::new(h).set_alignment(CellAlignment::Left))
                    .collect::<Vec<_>>(),
            );
        table
    }

    fn titled(title: &str, count: usize, unit: &str, table: &Table) -> String {
        format!(
            "╭─ {} {} ─╮\n{}\n",
            title,
            format!("[{} {}]", count, unit).bright_black(),
            table
        )
    }

    pub fn render_flavors(&self, flavors: &[Flavor]) -> String {
        if flavors.is_empty() {
            return "No flavors available".to_string();
        }

        let mut table = Self::table(&["ID", "CPU", "RAM (GB)", "DESCRIPTION"]);
        for flavor in flavors {
            table.add_row(vec![
                Cell::new(opt(flavor.id.as_deref())),
                Cell::new(opt(flavor.cpu)).set_alignment(CellAlignment::Right),
                Cell::new(opt(flavor.memory)).set_alignment(CellAlignment::Right),
                Cell::new(opt(flavor.description.as_deref())),
            ]);
        }

        Self::titled("Flavors", flavors.len(), "flavors", &table)
    }

    pub fn render_storages(&self, flavor_id: &str, storages: &ListStoragesResponse) -> String {
        let classes = storages.storage_classes.as_deref().unwrap_or_default();
        let range = storages.storage_range.as_ref();

        let mut table = Self::table(&["FLAVOR", "STORAGE CLASS", "MIN (GB)", "MAX (GB)"]);
        if classes.is_empty() {
            table.add_row(vec![
                Cell::new(flavor_id),
                Cell::new("").fg(self.theme.muted),
                Cell::new(opt(range.and_then(|r| r.min))),
                Cell::new(opt(range.and_then(|r| r.max))),
            ]);
        }
        for class in classes {
            table.add_row(vec![
                Cell::new(flavor_id),
                Cell::new(class),
                Cell::new(opt(range.and_then(|r| r.min))).set_alignment(CellAlignment::Right),
                Cell::new(opt(range.and_then(|r| r.max))).set_alignment(CellAlignment::Right),
            ]);
        }

        Self::titled("Storages", classes.len(), "classes", &table)
    }

    /// Versions in API order with the latest one highlighted
    pub fn render_versions(&self, versions: &[String], latest: Option<&str>) -> String {
        if versions.is_empty() {
            return "No versions available".to_string();
        }

        let mut table = Self::table(&["VERSION", "LATEST"]);
        for version in versions {
            let is_latest = latest == Some(version.as_str());
            let mut version_cell = Cell::new(version);
            let mut latest_cell = Cell::new("");
            if is_latest {
                version_cell = version_cell.fg(self.theme.success);
                latest_cell = Cell::new(StatusIcon::LATEST)
                    .fg(self.theme.success)
                    .set_alignment(CellAlignment::Center);
            }
            table.add_row(vec![version_cell, latest_cell]);
        }

        Self::titled("Versions", versions.len(), "versions", &table)
    }

    pub fn render_instance_types(&self, types: &[(&str, i64)]) -> String {
        let mut table = Self::table(&["TYPE", "REPLICAS"]);
        for (name, replicas) in types {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(replicas).set_alignment(CellAlignment::Right),
            ]);
        }

        Self::titled("Instance types", types.len(), "types", &table)
    }

    /// Backups of one instance alongside the status of their latest restore
    pub fn render_backups(&self, backups: &[Backup], restore_jobs: Option<&[RestoreJob]>) -> String {
        if backups.is_empty() {
            return "No backups found".to_string();
        }

        let mut table = Self::table(&[
            "ID",
            "NAME",
            "CREATED AT",
            "EXPIRES AT",
            "SIZE (BYTES)",
            "RESTORE STATUS",
        ]);
        for backup in backups {
            let status = backup
                .id
                .as_deref()
                .map(|id| restore_status(id, restore_jobs))
                .unwrap_or_else(|| "-".to_string());
            let status_cell = Cell::new(format!(
                "{} {}",
                StatusIcon::get_status_icon(&status),
                status
            ))
            .fg(self.theme.get_status_color(&status));

            table.add_row(vec![
                Cell::new(opt(backup.id.as_deref())),
                Cell::new(opt(backup.name.as_deref())),
                Cell::new(opt(backup.start_time.as_deref())),
                Cell::new(opt(backup.end_time.as_deref())),
                Cell::new(opt(backup.size)).set_alignment(CellAlignment::Right),
                status_cell,
            ]);
        }

        let mut output = Self::titled("Backups", backups.len(), "backups", &table);
        output.push_str(&format!(
            "Legend: {} Restored  {} Restoring  {} Failed  {} Never restored\n",
            StatusIcon::SUCCESS.green(),
            StatusIcon::PENDING.yellow(),
            StatusIcon::ERROR.red(),
            StatusIcon::UNKNOWN.bright_black()
        ));
        output
    }
}
