use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub const DEFAULT_BASE_URL: &str = "https://secret.url";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "network error: {e}"),
            FetchError::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

pub fn user_endpoint(base_url: &str, id: &str) -> String {
    format!("{}/user/{}", base_url.trim_end_matches('/'), id)
}

/// The data-fetching capability `UserDisplay` depends on. Taking it as a
/// prop lets callers point the component at any source and lets tests
/// substitute a fake without intercepting network calls.
#[async_trait(?Send)]
pub trait UserFetcher {
    async fn fetch_user(&self, id: &str) -> Result<User, FetchError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpUserFetcher {
    base_url: String,
}

impl HttpUserFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait(?Send)]
impl UserFetcher for HttpUserFetcher {
    async fn fetch_user(&self, id: &str) -> Result<User, FetchError> {
        let url = user_endpoint(&self.base_url, id);
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        // Status is not checked; a non-OK body simply fails the decode.
        resp.json::<User>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Cloneable fetcher handle so the trait object can travel as a prop.
/// Compares by identity: two handles are equal iff they share the fetcher.
#[derive(Clone)]
pub struct Fetcher(Rc<dyn UserFetcher>);

impl Fetcher {
    pub fn new(fetcher: impl UserFetcher + 'static) -> Self {
        Self(Rc::new(fetcher))
    }

    pub async fn fetch_user(&self, id: &str) -> Result<User, FetchError> {
        self.0.fetch_user(id).await
    }
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fetcher")
    }
}

impl PartialEq for Fetcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Seconds since mount. A reducer so each tick increments from the previous
/// value instead of whatever the interval closure captured at first render.
#[derive(Debug, PartialEq)]
pub struct ElapsedSeconds(pub u64);

impl Reducible for ElapsedSeconds {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(ElapsedSeconds(self.0 + 1))
    }
}

#[derive(Properties, PartialEq)]
pub struct UserDisplayProps {
    pub user_id: AttrValue,
    pub fetcher: Fetcher,
}

#[function_component(UserDisplay)]
pub fn user_display(props: &UserDisplayProps) -> Html {
    let user = use_state(|| None::<User>);
    let elapsed = use_reducer(|| ElapsedSeconds(0));

    // Fetch on mount and again whenever the id prop changes. Superseded
    // requests are not cancelled; the last one to resolve wins. On failure
    // the stored user is left as-is, so the view stays in its current state.
    {
        let user = user.clone();
        let fetcher = props.fetcher.clone();
        use_effect_with(props.user_id.clone(), move |id| {
            let id = id.to_string();
            spawn_local(async move {
                match fetcher.fetch_user(&id).await {
                    Ok(u) => user.set(Some(u)),
                    Err(e) => web_sys::console::error_1(
                        &format!("Error fetching user data: {e}").into(),
                    ),
                }
            });
            || ()
        });
    }

    // Tick once a second from mount to unmount, independent of the fetch
    // and never reset by an id change. Dropping the handle cancels it.
    {
        let dispatcher = elapsed.dispatcher();
        use_effect_with((), move |_| {
            let handle = Interval::new(1000, move || dispatcher.dispatch(()));
            move || drop(handle)
        });
    }

    html! {
        <div>
            <h1>{ "User Data Component" }</h1>
            {
                if let Some(u) = user.as_ref() {
                    html! {
                        <div>
                            <p>{ format!("Name: {}", u.name) }</p>
                            <p>{ format!("Email: {}", u.email) }</p>
                        </div>
                    }
                } else {
                    html! { <p>{ "Loading user data..." }</p> }
                }
            }
            <p>{ format!("Timer: {} seconds", elapsed.0) }</p>
        </div>
    }
}
