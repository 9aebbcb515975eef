use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::catalog::Catalog;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::pages::all_projects::AllProjectsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::project_detail::ProjectDetailPage;

/// Everything the pages read, loaded once before mounting.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: Arc<SiteConfig>,
    pub content: Arc<SiteContent>,
    pub catalog: Arc<Catalog>,
}

impl Site {
    pub fn load() -> Result<Self, String> {
        Ok(Self {
            config: Arc::new(SiteConfig::bundled()?),
            content: Arc::new(SiteContent::bundled()?),
            catalog: Arc::new(Catalog::bundled()?),
        })
    }
}

#[component]
pub fn App(site: Result<Site, String>) -> impl IntoView {
    match site {
        Ok(site) => {
            provide_context(site);
            view! {
                <Router>
                    <div class="app-layout">
                        <div class="background" aria-hidden="true">
                            <div class="orb orb-primary"></div>
                            <div class="orb orb-secondary"></div>
                        </div>
                        <Navbar />
                        <main class="content">
                            <Routes fallback=|| view! { <NotFoundPage /> }>
                                <Route path=path!("/") view=HomePage />
                                <Route path=path!("/projects") view=AllProjectsPage />
                                <Route path=path!("/project/:id") view=ProjectDetailPage />
                            </Routes>
                        </main>
                        <Footer />
                    </div>
                </Router>
            }
            .into_any()
        }
        Err(e) => view! {
            <div class="page load-error">
                <h2>"Something went wrong"</h2>
                <p class="error-text">{e}</p>
            </div>
        }
        .into_any(),
    }
}
