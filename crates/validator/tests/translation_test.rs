//! Translation through the validation context.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rulebook::prelude::*;
use rulebook::translate::Dictionary;

fn german() -> Bundle {
    let dictionary: Dictionary = HashMap::from([
        ("strings.required".to_owned(), "Dieses Feld ist erforderlich.".to_owned()),
        ("numbers.min".to_owned(), "Mindestens {0}.".to_owned()),
    ]);
    let mut bundle = Bundle::builtin();
    bundle.merge(Bundle::new().with_language("de", dictionary));
    bundle
}

fn translated_ctx(language: &str) -> Context {
    Context::new()
        .with_language(language)
        .with_translator(BundleTranslator::new().with_bundle(german()))
}

#[tokio::test]
async fn test_english_bundle_renders_required() {
    let ctx = translated_ctx("en");
    let err = number::<i64>().required().validate(&ctx, &0).await.unwrap_err();

    assert_eq!(err.to_string(), "This field is required.");
    assert!(err.contains_code(&codes::NUMBER_REQUIRED));
}

#[tokio::test]
async fn test_language_comes_from_context() {
    let ctx = translated_ctx("de");
    let err = number::<i64>().min(5).validate(&ctx, &1).await.unwrap_err();
    assert_eq!(err.to_string(), "Mindestens 5.");
}

#[tokio::test]
async fn test_field_wrappers_keep_translated_leaf() {
    let ctx = translated_ctx("de");
    let err = execute(&ctx, [named("name", "", string().required())])
        .await
        .unwrap_err();

    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!([{"key": "name", "err": "Dieses Feld ist erforderlich."}])
    );
}

#[tokio::test]
async fn test_each_element_is_translated_once() {
    let ctx = translated_ctx("en");
    let err = slice::<String>()
        .each(string().required())
        .validate(&ctx, &vec![String::new(), "ok".into(), String::new()])
        .await
        .unwrap_err();

    let messages: Vec<String> = err
        .as_aggregate()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(messages, vec!["This field is required."; 2]);
}

#[tokio::test]
async fn test_missing_bundle_is_reported() {
    let ctx = Context::new()
        .with_language("en")
        .with_translator(BundleTranslator::new());
    let err = number::<i64>().required().validate(&ctx, &0).await.unwrap_err();
    assert_eq!(err.to_string(), "bundle is not set");

    let translator = BundleTranslator::new();
    assert_eq!(
        translator.try_translate(&ctx, &RuleError::new(codes::NUMBER_REQUIRED, 0)),
        Err(TranslateError::BundleNotSet)
    );
}

#[tokio::test]
async fn test_closure_translator() {
    let ctx = Context::new().with_translator(translator_fn(|_ctx, err: RuleError| {
        if *err.code() == codes::STRING_REQUIRED {
            TranslatedError::new("string is required").into()
        } else {
            err.into()
        }
    }));

    let err = execute(
        &ctx,
        [
            named("name", "", string().required()),
            named("age", 0_u32, number::<u32>().required()),
        ],
    )
    .await
    .unwrap_err();

    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!([
            {"key": "name", "err": "string is required"},
            {"key": "age", "err": {"code": 3001, "input": 0}},
        ])
    );
}

#[tokio::test]
async fn test_config_context() {
    let ctx = Config::from_lookup(|name| (name == "RULEBOOK_FALLBACK").then(|| "rule_error".into()))
        .context()
        .with_language("fr");

    // No French dictionary: the rule error comes back untouched.
    let err = string().required().validate(&ctx, &String::new()).await.unwrap_err();
    assert_eq!(err.as_rule().map(RuleError::code), Some(&codes::STRING_REQUIRED));
}
