use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        Self::launch_with_size(None)
    }

    /// Phone-sized viewport, where the header collapses behind the menu button.
    pub fn launch_mobile() -> Result<Self> {
        Self::launch_with_size(Some((390, 844)))
    }

    fn launch_with_size(window_size: Option<(u32, u32)>) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(window_size)
            .build()
            .map_err(|e| anyhow::anyhow!("launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    /// Value of `name` on the first element matching `selector`.
    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_attribute_value(name)?)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Poll `name` on `selector` until `check` accepts it. The page is
    /// driven by wasm after load, so DOM updates land asynchronously.
    pub fn wait_for_attribute(
        &self,
        selector: &str,
        name: &str,
        check: impl Fn(Option<&str>) -> bool,
    ) -> Result<Option<String>> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let value = self.attribute(selector, name)?;
            if check(value.as_deref()) {
                return Ok(value);
            }
            if Instant::now() >= deadline {
                anyhow::bail!("{selector} [{name}] stayed at {value:?}");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }
}
