use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use boilcheck_core::error::AppError;
use boilcheck_core::traits::PageProbe;
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;

/// Accessible name of the animation-width slider on the deployed page.
const SLIDER_LABEL: &str = "보일링 애니메이션 폭";

/// The turbulence filter driving the boiling effect.
const TURBULENCE_SELECTOR: &str = "svg feTurbulence";

const BASE_FREQUENCY_ATTR: &str = "baseFrequency";

/// Poll interval while waiting for the slider to appear.
const VISIBILITY_POLL_MS: u64 = 100;

/// The deployed page renders a mobile layout.
const VIEWPORT_WIDTH: i64 = 390;
const VIEWPORT_HEIGHT: i64 = 844;

/// Outer bound on page open + navigation.
const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the element matching the slider's accessible name, if any.
/// The label is substituted for `__LABEL__` before evaluation.
const SLIDER_VISIBLE_JS: &str = r#"(() => {
    const sliders = document.querySelectorAll('input[type="range"], [role="slider"]');
    for (const el of sliders) {
        if (el.getAttribute('aria-label') !== "__LABEL__") continue;
        const rect = el.getBoundingClientRect();
        return rect.width > 0 && rect.height > 0;
    }
    return false;
})()"#;

/// Writes `__VALUE__` into the slider. The control is React-managed, so the
/// write must go through the native value setter and dispatch bubbling
/// input/change events or the framework never observes it.
const FILL_SLIDER_JS: &str = r#"(() => {
    const sliders = document.querySelectorAll('input[type="range"], [role="slider"]');
    for (const el of sliders) {
        if (el.getAttribute('aria-label') !== "__LABEL__") continue;
        const setter = Object.getOwnPropertyDescriptor(window.HTMLInputElement.prototype, 'value').set;
        setter.call(el, "__VALUE__");
        el.dispatchEvent(new Event('input', { bubbles: true }));
        el.dispatchEvent(new Event('change', { bubbles: true }));
        return true;
    }
    return false;
})()"#;

fn slider_visible_script() -> String {
    SLIDER_VISIBLE_JS.replace("__LABEL__", SLIDER_LABEL)
}

fn fill_slider_script(value: &str) -> String {
    FILL_SLIDER_JS
        .replace("__LABEL__", SLIDER_LABEL)
        .replace("__VALUE__", value)
}

/// One headless Chromium instance owning the check's single page.
///
/// Acquired once per invocation and released exactly once via
/// [`BrowserSession::close`], which the caller must await on every exit
/// path, success or failure.
pub struct BrowserSession {
    browser: Browser,
}

impl BrowserSession {
    /// Launches a headless Chromium browser.
    ///
    /// Requires a Chromium / Chrome binary reachable via `$PATH` (or the
    /// default locations checked by `chromiumoxide`).
    pub async fn launch() -> Result<Self, AppError> {
        let mut builder = BrowserConfig::builder();
        builder = builder.no_sandbox().disable_default_args();

        // Snap-packaged Chromium exposes a wrapper that rejects standard
        // Chrome CLI flags (--headless, --disable-gpu, …).  We try to
        // locate the *real* binary buried inside the snap, falling back
        // to any other Chrome/Chromium the user may have installed.
        if let Some(bin) = Self::find_chrome_binary() {
            tracing::info!("Using Chrome binary: {}", bin.display());
            builder = builder.chrome_executable(bin);
        }

        let config = builder
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-popup-blocking")
            .arg("--disable-translate")
            .arg("--no-first-run")
            .build()
            .map_err(|e| AppError::Generic(format!("Browser config error: {e}")))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| AppError::BrowserError(format!("Failed to launch browser: {e}")))?;

        // The CDP handler must be polled continuously for the connection to work.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    tracing::warn!("Browser CDP handler error: {event:?}");
                    break;
                }
            }
        });

        Ok(Self { browser })
    }

    /// Opens the target page in a new tab with the mobile viewport and
    /// waits until the document body has rendered.
    pub async fn open(&self, url: &str) -> Result<BrowserProbe, AppError> {
        let result = tokio::time::timeout(NAVIGATION_TIMEOUT, async {
            let page = self
                .browser
                .new_page("about:blank")
                .await
                .map_err(|e| AppError::BrowserError(format!("Failed to open a page: {e}")))?;

            page.execute(
                SetDeviceMetricsOverrideParams::builder()
                    .width(VIEWPORT_WIDTH)
                    .height(VIEWPORT_HEIGHT)
                    .device_scale_factor(1.0)
                    .mobile(true)
                    .build()
                    .map_err(AppError::Generic)?,
            )
            .await
            .map_err(|e| AppError::BrowserError(format!("Failed to set viewport: {e}")))?;

            page.goto(url)
                .await
                .map_err(|e| AppError::NavigationError(format!("Failed to navigate to {url}: {e}")))?;

            // Wait until <body> is present — a minimal signal that the page
            // has started rendering its content.
            page.find_element("body")
                .await
                .map_err(|e| AppError::NavigationError(format!("Page did not render body: {e}")))?;

            Ok::<_, AppError>(BrowserProbe {
                page: Arc::new(page),
            })
        })
        .await;

        match result {
            Ok(inner) => inner,
            Err(_) => Err(AppError::Timeout(NAVIGATION_TIMEOUT.as_secs())),
        }
    }

    /// Shuts the browser down. Close failures are logged, not propagated:
    /// by this point the check already has its outcome.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("Failed to close browser cleanly: {e}");
        }
        let _ = self.browser.wait().await;
    }

    /// Tries to locate the real Chrome/Chromium binary.
    ///
    /// On systems where Chromium is installed via **snap**, the wrapper at
    /// `/snap/bin/chromium` strips unknown CLI flags, breaking headless
    /// mode.  We look for the real binary inside the snap first, then fall
    /// back to well-known system paths.  If nothing is found we return
    /// `None` and let `chromiumoxide` do its own lookup.
    fn find_chrome_binary() -> Option<PathBuf> {
        let candidates: &[&str] = &[
            // Snap (Ubuntu default)
            "/snap/chromium/current/usr/lib/chromium-browser/chrome",
            // Flatpak
            "/var/lib/flatpak/exports/bin/org.chromium.Chromium",
            // Common apt / manual installs
            "/usr/bin/google-chrome-stable",
            "/usr/bin/google-chrome",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
        ];

        // Also honour an explicit override via env var.
        if let Ok(p) = std::env::var("CHROME_BIN") {
            let path = PathBuf::from(&p);
            if path.exists() {
                return Some(path);
            }
        }

        candidates.iter().map(PathBuf::from).find(|p| p.exists())
    }
}

/// [`PageProbe`] implementation speaking the Chrome DevTools Protocol.
///
/// Clones share the same tab.
#[derive(Clone)]
pub struct BrowserProbe {
    page: Arc<Page>,
}

impl BrowserProbe {
    async fn eval_bool(&self, script: &str) -> Result<bool, AppError> {
        self.page
            .evaluate(script)
            .await
            .map_err(|e| AppError::BrowserError(format!("Script evaluation failed: {e}")))?
            .into_value()
            .map_err(|e| AppError::BrowserError(format!("Unexpected script result: {e}")))
    }
}

impl PageProbe for BrowserProbe {
    async fn wait_for_slider(&self, timeout: Duration) -> Result<(), AppError> {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            if self.eval_bool(&slider_visible_script()).await? {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(AppError::ControlNotFound(timeout.as_millis() as u64));
            }
            tokio::time::sleep(Duration::from_millis(VISIBILITY_POLL_MS)).await;
        }
    }

    async fn fill_slider(&self, value: &str) -> Result<(), AppError> {
        let filled = self.eval_bool(&fill_slider_script(value)).await?;
        if !filled {
            return Err(AppError::BrowserError(format!(
                "Slider \"{SLIDER_LABEL}\" not found or not fillable"
            )));
        }
        Ok(())
    }

    async fn read_base_frequency(&self) -> Result<Option<String>, AppError> {
        let element = match self.page.find_element(TURBULENCE_SELECTOR).await {
            Ok(element) => element,
            // A missing filter element reads the same as a missing attribute.
            Err(_) => return Ok(None),
        };

        element
            .attribute(BASE_FREQUENCY_ATTR)
            .await
            .map_err(|e| {
                AppError::BrowserError(format!("Failed to read {BASE_FREQUENCY_ATTR}: {e}"))
            })
    }

    async fn pause(&self, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_embed_the_accessible_name() {
        assert!(slider_visible_script().contains(SLIDER_LABEL));
        assert!(!slider_visible_script().contains("__LABEL__"));
    }

    #[test]
    fn fill_script_embeds_the_target_value() {
        let script = fill_slider_script("0.01");
        assert!(script.contains("\"0.01\""));
        assert!(!script.contains("__VALUE__"));
    }
}
