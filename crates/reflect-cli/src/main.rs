mod cli;
mod render;
mod transport;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use reflect_core::calendar::CalendarPicker;
use reflect_core::config::ReflectConfig;
use reflect_core::datetime::{
  parse_local_date,
  today_local
};
use reflect_core::{
  LoadedReflection,
  ReflectionRequest,
  load_reflection
};
use tracing::{
  debug,
  info,
  warn
};

use crate::cli::{
  Command,
  GlobalCli
};
use crate::transport::HttpTransport;

fn main() {
  if let Err(err) = run() {
    eprintln!("error: {err:#}");
    std::process::exit(1);
  }
}

#[tokio::main(flavor = "current_thread")]
async fn run() -> anyhow::Result<()> {
  let cli = GlobalCli::parse();
  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;
  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting reflect CLI"
  );

  let mut config =
    load_config(cli.config.as_deref())?;
  config.apply_overrides(
    cli.endpoint.as_deref(),
    cli.uid.as_deref()
  );
  let today = today_local();

  match cli.command {
    | Command::Show { date, json } => {
      let loaded = fetch(
        &config,
        date.as_deref(),
        today
      )
      .await?;
      if json {
        println!(
          "{}",
          serde_json::to_string_pretty(
            &loaded.document
          )
          .context(
            "failed encoding reflection \
             as JSON"
          )?
        );
      } else {
        print!(
          "{}",
          render::render_reflection(
            &loaded
          )
        );
      }
    }
    | Command::Tasks { date, skip } => {
      let mut loaded = fetch(
        &config,
        date.as_deref(),
        today
      )
      .await?;
      for id in &skip {
        if !loaded.tasks.toggle(id, false)
        {
          warn!(id = %id, "no task with that id");
        }
      }
      let text = loaded
        .tasks
        .copy_text()
        .context("nothing to print")?;
      println!("{text}");
    }
    | Command::Calendar {
      month,
      select
    } => {
      let mut picker = CalendarPicker::new(
        today,
        config.week_start()
      );
      picker.open(today);
      if let Some(raw) = month.as_deref() {
        let target =
          parse_local_date(&format!(
            "{}-01",
            raw.trim()
          ))
          .with_context(|| {
            format!(
              "invalid month {raw:?}; \
               expected YYYY-MM"
            )
          })?;
        let delta = month_delta(
          picker.visible_month(),
          target
        );
        picker.navigate_month(delta);
      }
      if let Some(raw) = select.as_deref()
      {
        picker.select_day(
          parse_local_date(raw)?
        );
      }
      print!(
        "{}",
        render::render_calendar(
          &picker, today
        )
      );
    }
  }

  info!("done");
  Ok(())
}

async fn fetch(
  config: &ReflectConfig,
  date: Option<&str>,
  today: chrono::NaiveDate
) -> anyhow::Result<LoadedReflection> {
  let request = ReflectionRequest::new(
    &config.api,
    date,
    today
  )?;
  let transport = HttpTransport::new()?;
  load_reflection(&transport, &request)
    .await
    .map_err(|err| {
      anyhow::anyhow!(err.user_message())
    })
    .with_context(|| {
      format!(
        "failed to load reflection for \
         {}",
        request.date_string()
      )
    })
}

fn load_config(
  explicit: Option<&std::path::Path>
) -> anyhow::Result<ReflectConfig> {
  if let Some(path) = explicit {
    return ReflectConfig::load_file(path)
      .with_context(|| {
        format!(
          "failed to load config {}",
          path.display()
        )
      });
  }

  match default_config_path() {
    | Some(path) if path.is_file() => {
      ReflectConfig::load_file(&path)
        .with_context(|| {
          format!(
            "failed to load config {}",
            path.display()
          )
        })
    }
    | _ => {
      debug!("no config file found; using defaults");
      Ok(ReflectConfig::default())
    }
  }
}

fn default_config_path() -> Option<PathBuf>
{
  dirs::config_dir().map(|dir| {
    dir.join("reflect").join("reflect.toml")
  })
}

fn month_delta(
  from: chrono::NaiveDate,
  to: chrono::NaiveDate
) -> i32 {
  use chrono::Datelike;

  (to.year() - from.year()) * 12
    + to.month() as i32
    - from.month() as i32
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::month_delta;

  #[test]
  fn month_delta_spans_years() {
    let from =
      NaiveDate::from_ymd_opt(2026, 10, 17)
        .expect("valid date");
    let to =
      NaiveDate::from_ymd_opt(2024, 2, 1)
        .expect("valid date");
    assert_eq!(month_delta(from, to), -32);
  }
}
