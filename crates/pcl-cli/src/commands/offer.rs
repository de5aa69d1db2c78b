use chrono::{DateTime, Utc};
use pcl_core::countdown::Countdown;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OfferArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

#[derive(Serialize)]
struct OfferResponse {
    deadline: String,
    active: bool,
    remaining: String,
    countdown: Countdown,
}

impl OfferResponse {
    fn new(deadline: DateTime<Utc>, countdown: Countdown) -> Self {
        Self {
            deadline: deadline.to_rfc3339(),
            active: countdown.is_active(),
            remaining: if countdown.is_active() {
                countdown.to_string()
            } else {
                "offer ended".to_string()
            },
            countdown,
        }
    }
}

/// Handle `pcl offer`.
pub async fn handle(args: &OfferArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(deadline) = ctx.config.offer.deadline()? else {
        anyhow::bail!("no offer deadline configured (set offer.deadline or PCL_OFFER__DEADLINE)");
    };
    let mut countdown = Countdown::until(deadline, Utc::now());

    if args.watch && countdown.is_active() {
        watch(&mut countdown).await;
    }
    output(&OfferResponse::new(deadline, countdown), flags.format)
}

/// Tick once per second until the offer ends or Ctrl-C.
async fn watch(countdown: &mut Countdown) {
    let progress = Progress::spinner(&format!("Offer ends in {countdown}"));
    let live = ui::prefs().progress;
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let active = countdown.tick();
                if live {
                    progress.set_message(&format!("Offer ends in {countdown}"));
                } else {
                    ui::note(&countdown.to_string());
                }
                if !active {
                    progress.finish_ok("Offer ended");
                    return;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                progress.finish_clear();
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn past_deadline_reports_ended() {
        let deadline = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let response = OfferResponse::new(deadline, Countdown::until(deadline, now));
        assert!(!response.active);
        assert_eq!(response.remaining, "offer ended");
    }

    #[test]
    fn running_offer_shows_padded_units() {
        let deadline = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let response = OfferResponse::new(deadline, Countdown::until(deadline, now));
        assert!(response.active);
        assert_eq!(response.remaining, "1d 03h 04m 05s");
    }

    #[tokio::test(start_paused = true)]
    async fn watch_stops_when_the_offer_ends() {
        let mut countdown = Countdown::from_seconds(3);
        watch(&mut countdown).await;
        assert!(!countdown.is_active());
    }
}
