use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::RedirectConfig;
use crate::errors::{RedirectError, RedirectStatus};
use crate::target::{AllowList, RedirectTarget, evaluate};

/// Lo que la página de redirección puede hacer con su host.
pub trait Navigator {
  fn show_status(&mut self, status: RedirectStatus);

  fn navigate(&mut self, url: &str);

  /// `false` cuando la navegación ya sacó al usuario de la página.
  fn is_visible(&self) -> bool;
}

/// Ejecuta la redirección completa.
///
/// Sin parámetro se informa al momento. Los enlaces de aplicación se abren
/// enseguida y, si tras el retardo la página sigue visible, se navega a la
/// alternativa web. El resto se valida y se navega al cumplirse el retardo.
pub async fn run<N: Navigator>(
  navigator: &mut N,
  param: Option<&str>,
  config: &RedirectConfig,
) -> Result<RedirectTarget, RedirectError> {
  let allowed = AllowList::new(&config.allowed_domains).with_app_schemes(&config.app_schemes);

  match evaluate(param, &allowed) {
    Err(RedirectError::Missing) => {
      warn!("no 'url' parameter found");
      navigator.show_status(RedirectStatus::Missing);
      Err(RedirectError::Missing)
    }
    Ok(RedirectTarget::App { link, fallback }) => {
      info!(%link, "opening app link");
      navigator.show_status(RedirectStatus::Redirecting);
      navigator.navigate(&link);

      sleep(config.delay()).await;

      if navigator.is_visible() {
        info!(%fallback, "app did not open, using web fallback");
        navigator.navigate(&fallback);
      }
      Ok(RedirectTarget::App { link, fallback })
    }
    outcome => {
      sleep(config.delay()).await;

      match outcome {
        Ok(target) => {
          info!(url = target.web_url(), "redirecting");
          navigator.show_status(RedirectStatus::Redirecting);
          navigator.navigate(target.web_url());
          Ok(target)
        }
        Err(err) => {
          warn!(error = %err, "redirect rejected");
          navigator.show_status(RedirectStatus::from(&err));
          Err(err)
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;

  #[derive(Default)]
  struct Recorder {
    statuses: Vec<RedirectStatus>,
    visits: Vec<String>,
    leaves_page: bool,
  }

  impl Navigator for Recorder {
    fn show_status(&mut self, status: RedirectStatus) {
      self.statuses.push(status);
    }

    fn navigate(&mut self, url: &str) {
      self.visits.push(url.to_string());
    }

    fn is_visible(&self) -> bool {
      !self.leaves_page
    }
  }

  #[tokio::test(start_paused = true)]
  async fn web_link_waits_for_delay() {
    let mut nav = Recorder::default();
    let start = tokio::time::Instant::now();

    let target = run(&mut nav, Some("https://youtube.com/watch?v=1"), &RedirectConfig::default()).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(250));
    assert_eq!(target.web_url(), "https://youtube.com/watch?v=1");
    assert_eq!(nav.statuses, vec![RedirectStatus::Redirecting]);
    assert_eq!(nav.visits, vec!["https://youtube.com/watch?v=1".to_string()]);
  }

  #[tokio::test(start_paused = true)]
  async fn missing_param_reports_immediately() {
    let mut nav = Recorder::default();
    let start = tokio::time::Instant::now();

    let err = run(&mut nav, None, &RedirectConfig::default()).await.unwrap_err();

    assert_eq!(err, RedirectError::Missing);
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(nav.statuses, vec![RedirectStatus::Missing]);
    assert!(nav.visits.is_empty());
  }

  #[tokio::test(start_paused = true)]
  async fn blocked_target_never_navigates() {
    let mut nav = Recorder::default();

    let err = run(&mut nav, Some("https://evil.example/"), &RedirectConfig::default()).await.unwrap_err();

    assert!(matches!(err, RedirectError::Blocked(_)));
    assert_eq!(nav.statuses, vec![RedirectStatus::InvalidTarget]);
    assert!(nav.visits.is_empty());
  }

  #[tokio::test(start_paused = true)]
  async fn script_scheme_is_never_opened() {
    let mut nav = Recorder::default();

    let err = run(&mut nav, Some("javascript://youtube.com/%0Aalert(document.cookie)"), &RedirectConfig::default())
      .await
      .unwrap_err();

    assert!(matches!(err, RedirectError::Blocked(_)));
    assert_eq!(nav.statuses, vec![RedirectStatus::InvalidTarget]);
    assert!(nav.visits.is_empty());
  }

  #[tokio::test(start_paused = true)]
  async fn invalid_format_status() {
    let mut nav = Recorder::default();

    run(&mut nav, Some("::nope::"), &RedirectConfig::default()).await.unwrap_err();

    assert_eq!(nav.statuses, vec![RedirectStatus::InvalidFormat]);
  }

  #[tokio::test(start_paused = true)]
  async fn app_link_falls_back_when_page_stays_visible() {
    let mut nav = Recorder::default();

    run(&mut nav, Some("vnd.youtube://www.youtube.com/watch?v=9"), &RedirectConfig::default()).await.unwrap();

    assert_eq!(
      nav.visits,
      vec!["vnd.youtube://www.youtube.com/watch?v=9".to_string(), "https://www.youtube.com/watch?v=9".to_string()]
    );
  }

  #[tokio::test(start_paused = true)]
  async fn app_link_that_opens_skips_fallback() {
    let mut nav = Recorder { leaves_page: true, ..Recorder::default() };

    run(&mut nav, Some("soundcloud://soundcloud.com/nadia"), &RedirectConfig::default()).await.unwrap();

    assert_eq!(nav.visits, vec!["soundcloud://soundcloud.com/nadia".to_string()]);
  }
}
