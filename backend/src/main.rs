use anyhow::Result;
use appointment_scheduler::cli::Cli;
use appointment_scheduler::config::SchedulerConfig;
use appointment_scheduler::initialize_scheduler;
use chrono::Local;
use clap::Parser;
use log::info;
use shared::CalendarDayType;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting appointment scheduler");

    let cli = Cli::parse();
    let config = SchedulerConfig::load(&cli.config)?;

    let now = Local::now().naive_local();
    let state = initialize_scheduler(&config, now)?;

    let calendar = state
        .calendar_service
        .generate_calendar_month(&state.store, now.date());
    println!("{}", calendar.title);
    for day in calendar
        .days
        .iter()
        .filter(|day| day.day_type == CalendarDayType::MonthDay && day.appointment_count > 0)
    {
        println!("  {:>2}: {} appointment(s)", day.day, day.appointment_count);
        for preview in &day.previews {
            println!("      {}", preview.label);
        }
        if day.hidden_count > 0 {
            println!("      +{} more", day.hidden_count);
        }
    }

    let schedule = state
        .calendar_service
        .selected_day_schedule(&state.store, now.date());
    println!();
    println!("{}", schedule.title);
    println!("{}", schedule.summary);
    for entry in &schedule.entries {
        println!(
            "  {}  {} with {} [{}]",
            entry.time_range, entry.patient_name, entry.doctor_name, entry.status_label
        );
        if let Some(reason) = &entry.reason {
            println!("      {}", reason);
        }
    }

    Ok(())
}
