use alexa_smarthome_relay::config::{debug_enabled, env_lookup};
use alexa_smarthome_relay::handler::function_handler;
use alexa_smarthome_relay::http::ReqwestClient;
use alexa_smarthome_relay::logging::{self, LOG_FORMAT_VAR};
use alexa_smarthome_relay::relay::{Relay, Variant};
use anyhow::Context;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(
        debug_enabled(env_lookup),
        env_lookup(LOG_FORMAT_VAR).as_deref(),
    )?;

    let client = ReqwestClient::with_default_timeouts().context("Failed to build HTTP client")?;
    let relay = Relay::new(client, Variant::Authenticated);
    let relay = &relay;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(relay, event).await
    }))
    .await
}
