//! SOAP 1.1 request envelopes.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::config::Credentials;
use crate::error::{DepotError, Result};

/// SOAP 1.1 envelope namespace.
pub const SOAP_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XML Schema namespace.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Operation name of the depot listing call.
pub const GET_DEPOTS: &str = "GetDepots";

type XmlWriter = Writer<Vec<u8>>;

fn start(writer: &mut XmlWriter, element: BytesStart<'_>) -> Result<()> {
    writer
        .write_event(Event::Start(element))
        .map_err(DepotError::protocol)
}

fn end(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(DepotError::protocol)
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        return writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(DepotError::protocol);
    }
    start(writer, BytesStart::new(name))?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(DepotError::protocol)?;
    end(writer, name)
}

/// Build the `GetDepots` request.
///
/// Credentials go twice: once in the `SecureHeader` block and once in the
/// `loginDetails` argument, which is what the service expects.
pub fn get_depots_envelope(namespace: &str, credentials: &Credentials) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let user_id = credentials.user_id.to_string();

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(DepotError::protocol)?;
    start(
        &mut writer,
        BytesStart::new("soap:Envelope").with_attributes([
            ("xmlns:xsi", XSI_NS),
            ("xmlns:xsd", XSD_NS),
            ("xmlns:soap", SOAP_NS),
        ]),
    )?;

    start(&mut writer, BytesStart::new("soap:Header"))?;
    start(
        &mut writer,
        BytesStart::new("SecureHeader").with_attributes([("xmlns", namespace)]),
    )?;
    write_text_element(&mut writer, "Login", &credentials.login)?;
    write_text_element(&mut writer, "Password", &credentials.password)?;
    write_text_element(&mut writer, "UserID", &user_id)?;
    end(&mut writer, "SecureHeader")?;
    end(&mut writer, "soap:Header")?;

    start(&mut writer, BytesStart::new("soap:Body"))?;
    start(
        &mut writer,
        BytesStart::new(GET_DEPOTS).with_attributes([("xmlns", namespace)]),
    )?;
    start(&mut writer, BytesStart::new("loginDetails"))?;
    write_text_element(&mut writer, "accountCode", &credentials.login)?;
    write_text_element(&mut writer, "Password", &credentials.password)?;
    write_text_element(&mut writer, "accountID", &user_id)?;
    end(&mut writer, "loginDetails")?;
    start(&mut writer, BytesStart::new("callResult"))?;
    write_text_element(&mut writer, "Status", "None")?;
    write_text_element(&mut writer, "ErrorMessage", "")?;
    end(&mut writer, "callResult")?;
    end(&mut writer, GET_DEPOTS)?;
    end(&mut writer, "soap:Body")?;

    end(&mut writer, "soap:Envelope")?;

    String::from_utf8(writer.into_inner()).map_err(DepotError::protocol)
}
