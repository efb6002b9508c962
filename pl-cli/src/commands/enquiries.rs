//! Enquiry commands.

use clap::Subcommand;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use pl_core::config::ConfigHandle;
use pl_core::error::PlResult;
use pl_models::{Enquiry, EnquiryDraft, PropertyRef};
use pl_services::{EnquiryStore, Service};

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum EnquiriesAction {
    /// List all enquiries.
    List {
        /// Only show unread enquiries.
        #[arg(long)]
        unread: bool,
    },
    /// Send a new enquiry about a property.
    Create {
        /// Property ID.
        property: String,
        /// Message body.
        message: String,
        /// Subject line.
        #[arg(short, long)]
        subject: Option<String>,
        /// Property display name.
        #[arg(long)]
        property_name: Option<String>,
        /// User ID of the property owner.
        #[arg(long)]
        owner: Option<String>,
    },
    /// Delete an enquiry.
    Delete {
        /// Enquiry ID.
        id: String,
    },
    /// Mark an enquiry as read.
    Read {
        /// Enquiry ID.
        id: String,
    },
}

pub async fn run(config: ConfigHandle, action: EnquiriesAction, format: OutputFormat) -> PlResult<()> {
    let mut store = super::create_store(&config).await?;

    run_with(&mut store, action, format).await.map_err(|e| {
        if let Some(payload) = e.payload() {
            eprintln!("{} {}", style("Server said:").red(), payload);
        }
        e
    })
}

/// Run one action, then stop the store whether or not the action failed.
async fn run_with(store: &mut EnquiryStore, action: EnquiriesAction, format: OutputFormat) -> PlResult<()> {
    let result = dispatch(store, action, format).await;
    store.shutdown()?;
    result
}

async fn dispatch(store: &EnquiryStore, action: EnquiriesAction, format: OutputFormat) -> PlResult<()> {
    match action {
        EnquiriesAction::List { unread } => {
            store.fetch().await?;
            let mut list = store.snapshot();
            if unread {
                list.retain(Enquiry::is_unread);
            }

            match format {
                OutputFormat::Json => print_json(&list),
                OutputFormat::Text => {
                    if list.is_empty() {
                        println!("No enquiries found.");
                    } else {
                        println!("{}", enquiry_table(&list));
                        println!(
                            "\n{} enquiries, {} unread",
                            store.snapshot().len(),
                            style(store.unread_count()).bold()
                        );
                    }
                }
            }
            Ok(())
        }
        EnquiriesAction::Create { property, message, subject, property_name, owner } => {
            let mut draft = EnquiryDraft::new(message);
            if let Some(subject) = subject {
                draft = draft.with_subject(subject);
            }
            let mut property = PropertyRef::new(property);
            if let Some(name) = property_name {
                property = property.with_name(name);
            }
            if let Some(owner) = owner {
                property = property.with_owner(owner);
            }

            let resp = store.create(&draft, &property).await?;
            match format {
                OutputFormat::Json => print_json(&resp.data),
                OutputFormat::Text => {
                    let id = resp.data.as_ref().map(|e| e.enquiry_id.as_str()).unwrap_or("-");
                    println!("{} Enquiry {} sent.", style("✓").green(), style(id).bold());
                }
            }
            Ok(())
        }
        EnquiriesAction::Delete { id } => {
            let deleted = store.remove(&id).await?.is_some();
            match format {
                OutputFormat::Json => {
                    print_json(&serde_json::json!({ "enquiry_id": id, "deleted": deleted }))
                }
                OutputFormat::Text => {
                    if deleted {
                        println!("{} Enquiry {} deleted.", style("✓").green(), style(&id).bold());
                    } else {
                        println!(
                            "{} Server did not confirm deletion of {}.",
                            style("!").yellow(),
                            style(&id).bold()
                        );
                    }
                }
            }
            Ok(())
        }
        EnquiriesAction::Read { id } => {
            let updated = store.mark_read(&id).await?;
            match format {
                OutputFormat::Json => print_json(&updated),
                OutputFormat::Text => {
                    println!(
                        "{} Marked {} as read.",
                        style("✓").green(),
                        style(updated.title()).bold()
                    );
                }
            }
            Ok(())
        }
    }
}

fn enquiry_table(list: &[Enquiry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["ID", "Subject", "Property", "Message", "Read"]);

    for e in list {
        let property = e
            .property
            .as_ref()
            .map(|p| p.name.clone().unwrap_or_else(|| p.property_id.clone()))
            .unwrap_or_else(|| "-".to_string());
        let message = e.message.as_deref().unwrap_or("-");
        let read = if e.read { "yes" } else { "no" };

        table.add_row(vec![
            e.enquiry_id.clone(),
            super::truncate(e.subject.as_deref().unwrap_or("-"), 30),
            super::truncate(&property, 25),
            super::truncate(message, 40),
            read.to_string(),
        ]);
    }

    table
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
