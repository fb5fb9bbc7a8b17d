//! Home page widgets.

mod quotes;
mod typing;
mod weather;

pub use quotes::{quote_at, Quote, QuoteCycle, QuoteRotator, QUOTES, QUOTE_PERIOD_MS};
pub use typing::{typed_prefix, TypingText, TYPING_STEP_MS};
pub use weather::{fetch_current, LiveWeather, WeatherSnapshot, WeatherStatus, STATIC_SNAPSHOT};
