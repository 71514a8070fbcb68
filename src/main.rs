use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use dashviz::api::{ApiClient, Backend};
use dashviz::charts::line::TimeVariant;
use dashviz::config::Config;
use dashviz::logging::{log, obj, v_num, v_str, Domain, Level};
use dashviz::page::{CloudPage, LocationPage, ThemePage, TimesPage, TimesSummary};
use dashviz::transform::DatasetStats;

#[derive(Serialize)]
struct ExportStats {
    themes: Option<DatasetStats>,
    locations: Option<DatasetStats>,
    keywords: Option<DatasetStats>,
    publish_times: Option<TimesSummary>,
}

fn write_spec(dir: &str, name: &str, spec: &serde_json::Value) -> Result<()> {
    let path = Path::new(dir).join(name);
    let body = serde_json::to_string_pretty(spec)?;
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    log(Level::Info, Domain::System, "spec_written", obj(&[("file", v_str(name))]));
    Ok(())
}

async fn export_cycle(cfg: &Config, backend: &dyn Backend) -> Result<()> {
    let mut themes = ThemePage::new(cfg.display_count);
    let mut locations = LocationPage::new(cfg.display_count);
    let mut words = CloudPage::new(cfg.cloud_shape, cfg.max_words);
    let mut times = TimesPage::new();

    themes.refresh(backend).await;
    locations.refresh(backend).await;
    words.refresh(backend).await;
    times.refresh(backend).await;

    for (page, state) in [
        ("themes", themes.state.error()),
        ("locations", locations.state.error()),
        ("word_cloud", words.state.error()),
        ("publish_times", times.state.error()),
    ] {
        if let Some(err) = state {
            anyhow::bail!("{} page failed: {}", page, err);
        }
    }

    let mut rng = rand::thread_rng();
    if let Some(spec) = themes.spec() {
        write_spec(&cfg.out_dir, "bar.json", &spec)?;
    }
    if let Some(spec) = locations.spec() {
        write_spec(&cfg.out_dir, "pie.json", &spec)?;
    }
    if let Some(spec) = words.spec(&mut rng) {
        write_spec(&cfg.out_dir, "cloud.json", &spec)?;
    }
    for variant in TimeVariant::ALL {
        if let Some(spec) = times.spec_for(variant) {
            write_spec(&cfg.out_dir, &format!("line_{}.json", variant.as_str()), &spec)?;
        }
    }

    let stats = ExportStats {
        themes: themes.stats(),
        locations: locations.stats(),
        keywords: words.stats(),
        publish_times: times.stats(),
    };
    write_spec(&cfg.out_dir, "stats.json", &serde_json::to_value(&stats)?)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[
            ("api_base", v_str(&cfg.api_base)),
            ("out_dir", v_str(&cfg.out_dir)),
            ("refresh_secs", v_num(cfg.refresh_secs as f64)),
        ]),
    );

    std::fs::create_dir_all(&cfg.out_dir).with_context(|| format!("creating {}", cfg.out_dir))?;
    let client = ApiClient::new(&cfg.api_base, cfg.http_timeout_secs)?;

    match client.health().await {
        Ok(health) => log(
            Level::Info,
            Domain::System,
            "backend_health",
            obj(&[("status", v_str(&health.status)), ("message", v_str(&health.message))]),
        ),
        Err(e) => log(
            Level::Warn,
            Domain::System,
            "backend_unreachable",
            obj(&[("error", v_str(&e.to_string()))]),
        ),
    }

    if cfg.refresh_secs == 0 {
        export_cycle(&cfg, &client).await?;
        log(Level::Info, Domain::System, "done", obj(&[]));
        return Ok(());
    }

    loop {
        if let Err(e) = export_cycle(&cfg, &client).await {
            log(
                Level::Error,
                Domain::System,
                "cycle_failed",
                obj(&[("error", v_str(&format!("{:#}", e)))]),
            );
        }
        log(
            Level::Debug,
            Domain::System,
            "sleeping",
            obj(&[("secs", json!(cfg.refresh_secs))]),
        );
        tokio::time::sleep(std::time::Duration::from_secs(cfg.refresh_secs)).await;
    }
}
