use anyhow::Result;
use colored::*;
use std::io::{self, Write};
use std::path::Path;

use fleet_management::client::HttpDriversClient;
use fleet_management::forms::{DriverForm, FileSelection, CNH_MASK, CPF_MASK, PHONE_MASK};
use fleet_management::models::CNH_CATEGORIES;
use fleet_management::ui::{
    DriversPage, SubmitOutcome, APP_TITLE, NAV_SECTIONS, TABLE_HEADERS,
};

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FLEET_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client = HttpDriversClient::new(&base_url)?;
    let mut page = DriversPage::new(client);

    loop {
        println!();
        println!("{}", APP_TITLE.bright_blue().bold());
        println!("{}", "=".repeat(APP_TITLE.chars().count()).bright_blue());
        for (i, section) in NAV_SECTIONS.iter().enumerate() {
            println!(
                "{}. {} {} - {}",
                i + 1,
                section.title.bold(),
                section.path.dimmed(),
                section.description
            );
        }
        println!("0. 🚪 Salir");

        let choice = prompt("Selecciona una opción: ")?;
        match choice.parse::<usize>() {
            Ok(0) => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            Ok(n) if (1..=NAV_SECTIONS.len()).contains(&n) => {
                let section = &NAV_SECTIONS[n - 1];
                if section.implemented {
                    drivers_menu(&mut page).await?;
                } else {
                    println!(
                        "{} {}",
                        "🚧".yellow(),
                        format!("{}: coming soon", section.title).yellow()
                    );
                }
            }
            _ => println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red()),
        }
    }

    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Pedir un valor mostrando el actual; Enter lo conserva
fn prompt_with_current(label: &str, current: &str) -> io::Result<String> {
    let answer = prompt(&format!("{} [{}]: ", label, current))?;
    Ok(if answer.is_empty() { current.to_string() } else { answer })
}

async fn drivers_menu(page: &mut DriversPage<HttpDriversClient>) -> Result<()> {
    page.load().await;

    loop {
        println!();
        println!("{}", "👤 Drivers".bright_green().bold());
        render_table(page);
        println!("a) Add Driver   e <id>) Edit   d <id>) Delete   r) Refresh   b) Back");

        let command = prompt("> ")?;
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next().and_then(|id| id.parse::<i64>().ok())) {
            (Some("a"), _) => {
                page.open_create();
                run_dialog(page).await?;
            }
            (Some("e"), Some(id)) => {
                if page.open_edit(id) {
                    run_dialog(page).await?;
                } else {
                    println!("{}", format!("❌ Driver {} not found", id).bright_red());
                }
            }
            (Some("d"), Some(id)) => {
                match page.delete(id).await {
                    Ok(()) => println!("{}", format!("🗑️  Driver {} deleted", id).bright_green()),
                    Err(e) if e.is_not_found() => {
                        println!("{}", format!("❌ Driver {} not found", id).bright_red())
                    }
                    Err(e) => println!("{}", format!("❌ {}", e).bright_red()),
                }
            }
            (Some("r"), _) => page.load().await,
            (Some("b"), _) => return Ok(()),
            _ => println!("{}", "❌ Comando inválido".bright_red()),
        }
    }
}

fn render_table(page: &DriversPage<HttpDriversClient>) {
    if let Some(message) = page.list_message() {
        println!("{}", message.bright_red());
        return;
    }

    println!(
        "{:<5} {:<28} {:<14} {:<14} {:<14} {}",
        "ID".bold(),
        TABLE_HEADERS[0].bold(),
        TABLE_HEADERS[1].bold(),
        TABLE_HEADERS[2].bold(),
        TABLE_HEADERS[3].bold(),
        TABLE_HEADERS[4].bold()
    );
    for row in page.rows() {
        println!(
            "{:<5} {:<28} {:<14} {:<14} {:<14} {}",
            row.id, row.name, row.cpf, row.phone, row.cnh_number, row.categories
        );
    }
}

fn read_selection(path: &str) -> Option<FileSelection> {
    match FileSelection::from_path(Path::new(path)) {
        Ok(file) => Some(file),
        Err(e) => {
            println!("{}", format!("❌ No se pudo leer {}: {}", path, e).bright_red());
            None
        }
    }
}

fn fill_form(form: &mut DriverForm) -> io::Result<()> {
    form.name = prompt_with_current("Name", &form.name)?;

    let cpf = prompt_with_current(&format!("CPF ({} digits)", CPF_MASK.capacity()), &form.cpf)?;
    form.set_cpf(&cpf);
    let phone = prompt_with_current(
        &format!("Phone (up to {} digits)", PHONE_MASK.capacity()),
        &form.phone,
    )?;
    form.set_phone(&phone);
    let cnh = prompt_with_current(
        &format!("CNH Number ({} digits)", CNH_MASK.capacity()),
        &form.cnh_number,
    )?;
    form.set_cnh_number(&cnh);

    println!("CNH Categories: {}", CNH_CATEGORIES.join(" "));
    let categories = prompt_with_current("Categories (comma separated)", &form.cnh_categories.join(","))?;
    form.cnh_categories = categories
        .split(',')
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .collect();

    let photo = prompt("Photo path (JPG, PNG or GIF, max 5MB; Enter to skip): ")?;
    if !photo.is_empty() {
        form.photo = read_selection(&photo);
    }
    if let Some(preview) = form.photo_preview() {
        println!("🖼️  Preview: {}...", &preview[..preview.len().min(48)]);
    }

    let pdf = prompt("CNH PDF path (max 10MB; Enter to skip): ")?;
    if !pdf.is_empty() {
        form.cnh_pdf = read_selection(&pdf);
    }
    if let Some(name) = form.cnh_pdf_name() {
        println!("📄 {}", name);
    }

    Ok(())
}

async fn run_dialog(page: &mut DriversPage<HttpDriversClient>) -> Result<()> {
    loop {
        let title = page.dialog().title().unwrap_or_default();
        println!();
        println!("{}", title.bright_cyan().bold());
        println!("{}", "-".repeat(title.len()).bright_cyan());

        if let Some(form) = page.form_mut() {
            fill_form(form)?;
        }

        if prompt("Save? (s = save, c = cancel): ")? == "c" {
            page.cancel();
            return Ok(());
        }

        match page.submit().await {
            SubmitOutcome::Invalid(errors) => {
                for (field, message) in errors.iter() {
                    println!("{}", format!("❌ {}: {}", field.label(), message).bright_red());
                }
            }
            SubmitOutcome::Saved { id } => {
                println!("{}", format!("✅ Driver {} saved", id).bright_green());
                return Ok(());
            }
            SubmitOutcome::Failed(message) => {
                println!("{}", format!("❌ {}", message).bright_red());
                return Ok(());
            }
            SubmitOutcome::NotOpen => return Ok(()),
        }
    }
}
