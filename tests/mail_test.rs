use lottery_notify::*;

fn multipart_email(html: &str) -> Vec<u8> {
    format!(
        "From: Loterias y Apuestas <envios@loteriasyapuestas.es>\r\n\
         To: player@example.com\r\n\
         Subject: Resguardo de tu apuesta\r\n\
         Date: Fri, 23 Jan 2026 09:15:00 +0100\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: multipart/alternative; boundary=\"XYZ\"\r\n\
         \r\n\
         --XYZ\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         \r\n\
         Version en texto\r\n\
         --XYZ\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         \r\n\
         {html}\r\n\
         --XYZ--\r\n"
    )
    .into_bytes()
}

#[test]
fn test_parse_multipart_html() {
    let raw =
        multipart_email("<html><body><p>Tu saldo actual es: <b>5,00 €</b></p></body></html>");
    let email = TicketEmail::parse(&raw).unwrap();

    assert_eq!(email.from.as_deref(), Some("envios@loteriasyapuestas.es"));
    assert_eq!(email.subject.as_deref(), Some("Resguardo de tu apuesta"));
    assert!(email.html.contains("saldo actual es"));
    assert!(!email.html.contains("Version en texto"));

    let ticket = TicketRecord::extract(&email.html);
    assert_eq!(ticket.balance.as_deref(), Some("5,00€"));
}

#[test]
fn test_parse_nested_multipart() {
    let raw = b"From: envios@loteriasyapuestas.es\r\n\
                Subject: Resguardo\r\n\
                Content-Type: multipart/mixed; boundary=\"OUTER\"\r\n\
                \r\n\
                --OUTER\r\n\
                Content-Type: multipart/alternative; boundary=\"INNER\"\r\n\
                \r\n\
                --INNER\r\n\
                Content-Type: text/plain\r\n\
                \r\n\
                plain\r\n\
                --INNER\r\n\
                Content-Type: text/html\r\n\
                \r\n\
                <p>nested html</p>\r\n\
                --INNER--\r\n\
                --OUTER--\r\n";
    let email = TicketEmail::parse(raw).unwrap();

    assert!(email.html.contains("nested html"));
    assert!(email.is_from("envios@loteriasyapuestas.es"));
}

#[test]
fn test_parse_single_part_html() {
    let raw = b"From: envios@loteriasyapuestas.es\r\n\
                Subject: Test\r\n\
                Content-Type: text/html\r\n\
                \r\n\
                <html><body><h1>Hello</h1></body></html>";
    let email = TicketEmail::parse(raw).unwrap();

    assert!(email.html.contains("<h1>Hello</h1>"));
}

#[test]
fn test_parse_plain_only_is_error() {
    let raw = b"From: envios@loteriasyapuestas.es\r\n\
                Subject: Test\r\n\
                \r\n\
                Just text.";
    let err = TicketEmail::parse(raw).unwrap_err();

    assert!(matches!(err, LotteryError::NoHtml));
}

#[test]
fn test_is_from_ignores_case_and_display_name() {
    let raw = multipart_email("<p>x</p>");
    let email = TicketEmail::parse(&raw).unwrap();

    assert!(email.is_from("ENVIOS@LoteriasYApuestas.es"));
    assert!(email.is_from(" envios@loteriasyapuestas.es "));
    assert!(!email.is_from("other@example.com"));
}

#[test]
fn test_missing_from_header() {
    let raw = b"Subject: Test\r\nContent-Type: text/html\r\n\r\n<p>x</p>";
    let email = TicketEmail::parse(raw).unwrap();

    assert!(email.from.is_none());
    assert!(!email.is_from(DEFAULT_SENDER_ADDRESS));
}
