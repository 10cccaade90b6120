//! Hand-off message and link tests

use enrol_handoff::{
    encode_uri_component, DeepLink, HandOff, Handoff, HandoffConfig, HandoffError,
    MessageTemplate,
};
use enrol_test_utils::{record_from, sample_input_without_email, sample_record};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const EXPECTED_MESSAGE: &str = concat!(
    "*NOVA INSCRIÇÃO - TECH_STAR ACADEMY*\n",
    "  \n",
    "*Nome:* Ana Silva\n",
    "*Idade:* 17\n",
    "*WhatsApp:* 923 456 789\n",
    "*Email:* ana.silva@example.ao\n",
    "*Escolaridade:* médio\n",
    "*Nível:* Iniciante\n",
    "*Fonte:* redes sociais\n",
    "\n",
    "*Cursos de interesse:*\n",
    "• Lógica de Programação\n",
    "• Inteligência Artificial\n",
    "\n",
    "Veja o formulário em anexo.",
);

/// Reverse of the encoder, for checking
fn decode(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
            out.push(u8::from_str_radix(hex, 16).unwrap());
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn message_matches_template() {
    assert_eq!(MessageTemplate::default().compose(&sample_record()), EXPECTED_MESSAGE);
}

#[test]
fn message_without_email() {
    let record = record_from(&sample_input_without_email());
    let message = MessageTemplate::default().compose(&record);

    assert!(message.contains("\n*Email:* Não fornecido\n"));
}

#[test]
fn prepared_link_carries_message() {
    let HandOff { message, link } = Handoff::default().prepare(&sample_record()).unwrap();

    let prefix = "https://wa.me/244952993627?text=";
    assert!(link.as_str().starts_with(prefix));
    let encoded = &link.as_str()[prefix.len()..];
    assert!(encoded.starts_with("*NOVA%20INSCRI%C3%87%C3%83O%20-%20TECH_STAR%20ACADEMY*%0A%20%20%0A*Nome%3A*%20Ana%20Silva%0A"));
    assert_eq!(decode(encoded), message);
}

#[test]
fn custom_endpoint_and_template() {
    let handoff = Handoff::new(HandoffConfig {
        base_url: "https://chat.example.org/".to_string(),
        recipient: "+351 912 345 678".to_string(),
    })
    .with_template(MessageTemplate::new("OUTRA ACADEMIA"));

    let prepared = handoff.prepare(&sample_record()).unwrap();
    assert!(prepared
        .link
        .as_str()
        .starts_with("https://chat.example.org/351912345678?text=*NOVA%20INSCRI%C3%87%C3%83O%20-%20OUTRA%20ACADEMIA*"));
}

#[test]
fn bad_recipient_rejected() {
    let handoff = Handoff::new(HandoffConfig {
        recipient: "12ab".to_string(),
        ..HandoffConfig::default()
    });
    assert_eq!(
        handoff.prepare(&sample_record()),
        Err(HandoffError::InvalidRecipient("12ab".to_string()))
    );
}

#[test]
fn bad_base_url_rejected() {
    let result = DeepLink::builder().base_url("wa.me").text("x").build();
    assert_eq!(result, Err(HandoffError::InvalidBaseUrl("wa.me".to_string())));
    assert!(HandoffConfig::default().validate().is_ok());
}

proptest! {
    #[test]
    fn encoding_round_trips(text in "\\PC*") {
        prop_assert_eq!(decode(&encode_uri_component(&text)), text);
    }

    #[test]
    fn encoded_output_is_url_safe(text in "\\PC*") {
        let encoded = encode_uri_component(&text);
        prop_assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_.!~*'()%".contains(&b)));
    }
}
