//! Admin page - bulk export and import.
//!
//! Exports are downloaded through the API and written wherever the save
//! dialog points. Imports are parsed locally first and previewed; nothing
//! is sent until the admin confirms.

use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::FileDialog;
use srefhub_core::admin::{export_file_name, parse_records, Record};
use srefhub_core::{ExportFormat, ResourceKind};
use srefhub_ui::{Button, ButtonVariant, FilterPills, PillOption};

use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_feedback};

/// A parsed file waiting for confirmation
#[derive(Clone, PartialEq, Debug)]
struct PendingImport {
    kind: ResourceKind,
    path: PathBuf,
    records: Vec<Record>,
}

impl PendingImport {
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Field names of the first record
    fn fields(&self) -> Vec<String> {
        self.records
            .first()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default()
    }
}

fn resource_options() -> Vec<PillOption> {
    ResourceKind::ALL
        .iter()
        .map(|k| PillOption::new(k.as_str(), k.label()))
        .collect()
}

fn format_options() -> Vec<PillOption> {
    ExportFormat::ALL
        .iter()
        .map(|f| PillOption::new(f.as_str(), f.as_str().to_uppercase()))
        .collect()
}

#[component]
pub fn Admin() -> Element {
    let api = use_api();
    let feedback = use_feedback();

    let mut kind = use_signal(|| ResourceKind::Posts);
    let mut format = use_signal(ExportFormat::default);
    let mut busy = use_signal(|| false);
    let mut pending: Signal<Option<PendingImport>> = use_signal(|| None);

    let export_api = api.clone();
    let export = move |_: ()| {
        if busy() {
            return;
        }
        busy.set(true);
        let api = export_api.clone();
        let (kind, format) = (kind(), format());

        spawn(async move {
            match api.export(kind, format).await {
                Ok(bytes) => {
                    let default_name = export_file_name(kind, format, chrono::Local::now().date_naive());
                    let target = tokio::task::spawn_blocking(move || {
                        FileDialog::new()
                            .set_title("Save export")
                            .set_file_name(default_name)
                            .add_filter(format.as_str(), &[format.as_str()])
                            .save_file()
                    })
                    .await
                    .ok()
                    .flatten();

                    if let Some(path) = target {
                        match tokio::fs::write(&path, &bytes).await {
                            Ok(()) => {
                                tracing::info!(kind = %kind, path = ?path, bytes = bytes.len(), "Export saved");
                                feedback.success(format!("Saved {} ({} bytes)", path.display(), bytes.len()));
                            }
                            Err(e) => feedback.error("Could not write export", &e.into()),
                        }
                    }
                }
                Err(e) => feedback.error("Export failed", &e),
            }
            busy.set(false);
        });
    };

    let choose_file = move |_: ()| {
        let kind = kind();
        let selected = format();
        spawn(async move {
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .set_title("Choose import file")
                    .add_filter("JSON or CSV", &["json", "csv"])
                    .pick_file()
            })
            .await
            .ok()
            .flatten();

            let Some(path) = picked else { return };
            let format = ExportFormat::from_path(&path).unwrap_or(selected);

            let parsed = match tokio::fs::read(&path).await {
                Ok(bytes) => parse_records(&bytes, format),
                Err(e) => Err(e.into()),
            };
            match parsed {
                Ok(records) => {
                    tracing::info!(kind = %kind, path = ?path, records = records.len(), "Import file parsed");
                    pending.set(Some(PendingImport { kind, path, records }));
                }
                Err(e) => {
                    pending.set(None);
                    feedback.error("Could not read import file", &e);
                }
            }
        });
    };

    let import_api = api.clone();
    let confirm_import = move |_: ()| {
        let Some(job) = pending() else { return };
        busy.set(true);
        let api = import_api.clone();
        spawn(async move {
            match api.import(job.kind, &job.records).await {
                Ok(summary) => {
                    let message = summary.message.clone().unwrap_or_else(|| {
                        format!("Imported {} {} record(s)", summary.imported, job.kind)
                    });
                    if summary.failed > 0 {
                        feedback.notify(srefhub_core::Notice::info(format!(
                            "{} ({} failed)",
                            message, summary.failed
                        )));
                    } else {
                        feedback.success(message);
                    }
                    pending.set(None);
                }
                Err(e) => feedback.error("Import failed", &e),
            }
            busy.set(false);
        });
    };

    let export_blurb = format!(
        "Download every {} record as {}.",
        kind().label(),
        format().as_str().to_uppercase()
    );
    let preview = pending().map(|job| {
        let summary = format!(
            "{} {} record(s) parsed from {}",
            job.records.len(),
            job.kind,
            job.file_name()
        );
        (summary, job.fields().join(", "), job.records.len())
    });

    rsx! {
        NavHeader { current: NavLocation::Admin }

        main { class: "page admin-page",
            header { class: "page-header",
                h1 { class: "page-title", "Admin" }
                p { class: "subtitle", "Bulk export and import. Requires an admin token." }
            }

            section { class: "admin-section",
                h2 { class: "section-header", "Collection" }
                FilterPills {
                    options: resource_options(),
                    selected: kind().as_str().to_string(),
                    on_select: move |value: String| {
                        if let Ok(parsed) = value.parse::<ResourceKind>() {
                            kind.set(parsed);
                            pending.set(None);
                        }
                    },
                    aria_label: "Collection".to_string(),
                }
                FilterPills {
                    options: format_options(),
                    selected: format().as_str().to_string(),
                    on_select: move |value: String| {
                        if let Ok(parsed) = value.parse::<ExportFormat>() {
                            format.set(parsed);
                        }
                    },
                    aria_label: "Format".to_string(),
                }
            }

            section { class: "admin-section",
                h2 { class: "section-header", "Export" }
                p { class: "body-text", "{export_blurb}" }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: busy(),
                    onclick: export,
                    if busy() { "Working..." } else { "Export" }
                }
            }

            section { class: "admin-section",
                h2 { class: "section-header", "Import" }
                p { class: "body-text",
                    "JSON (an array of objects, or an object with a records array) or CSV with a header row."
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: busy(),
                    onclick: choose_file,
                    "Choose file..."
                }

                if let Some((summary, fields, count)) = preview {
                    div { class: "import-preview",
                        p { class: "body-text", "{summary}" }
                        if !fields.is_empty() {
                            p { class: "import-fields", "Fields: {fields}" }
                        }
                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: busy() || count == 0,
                                onclick: confirm_import,
                                "Import {count} record(s)"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| pending.set(None),
                                "Discard"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srefhub_core::admin::parse_csv_records;

    #[test]
    fn preview_reports_file_and_fields() {
        let job = PendingImport {
            kind: ResourceKind::Gallery,
            path: PathBuf::from("/tmp/exports/gallery.csv"),
            records: parse_csv_records(b"title,prompt\nKoi,pond\n").unwrap(),
        };
        assert_eq!(job.file_name(), "gallery.csv");
        assert_eq!(job.fields(), vec!["prompt".to_string(), "title".to_string()]);
    }

    #[test]
    fn option_lists_cover_every_choice() {
        assert_eq!(resource_options().len(), ResourceKind::ALL.len());
        assert_eq!(format_options()[1].label, "CSV");
    }
}
