mod common;

use httpmock::Method::POST;
use plaid_rs::Options;
use serde_json::{Value, json};

use common::{Recorder, client_for, plaid_with, private, setup_server};

#[tokio::test]
async fn get_accounts_returns_body_verbatim() {
    let transport = Recorder::replying(200, r#"{"accounts":[]}"#);
    let plaid = plaid_with(transport.clone());

    let resp = plaid.client().get_accounts("token").await.unwrap();

    assert_eq!(Value::Object(resp), json!({"accounts": []}));
    let req = transport.last();
    assert_eq!(req.url, "https://sandbox.plaid.com/accounts/get");
    assert_eq!(transport.last_body(), private(json!({"access_token": "token"})));
}

#[tokio::test]
async fn balance_forwards_options() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/accounts/balance/get").json_body(private(
            json!({"access_token": "tok", "options": {"account_ids": ["a1", "a2"]}}),
        ));
        then.status(200)
            .json_body(json!({"accounts": [{"account_id": "a1"}]}));
    });

    let mut options = Options::new();
    options.insert("account_ids".into(), json!(["a1", "a2"]));
    let resp = client_for(&server)
        .get_balance("tok", Some(options))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp["accounts"][0]["account_id"], "a1");
}

#[tokio::test]
async fn option_bags_default_to_empty_object() {
    let transport = Recorder::replying(200, "{}");
    let client = plaid_with(transport.clone()).client().clone();

    client.get_auth("tok", None).await.unwrap();
    assert_eq!(
        transport.last_body(),
        private(json!({"access_token": "tok", "options": {}}))
    );

    client.get_liabilities("tok", None).await.unwrap();
    assert_eq!(transport.last_body()["options"], json!({}));

    client.get_balance("tok", None).await.unwrap();
    assert_eq!(transport.last_body()["options"], json!({}));
}

#[tokio::test]
async fn identity_and_income_have_no_options_key() {
    let transport = Recorder::replying(200, "{}");
    let client = plaid_with(transport.clone()).client().clone();

    client.get_identity("tok").await.unwrap();
    assert_eq!(transport.last().url, "https://sandbox.plaid.com/identity/get");
    assert_eq!(transport.last_body(), private(json!({"access_token": "tok"})));

    client.get_income("tok").await.unwrap();
    assert_eq!(transport.last().url, "https://sandbox.plaid.com/income/get");
    assert!(transport.last_body().get("options").is_none());
}
