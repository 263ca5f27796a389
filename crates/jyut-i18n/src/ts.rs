//! Reader for Qt Linguist `.ts` documents.
//!
//! A single forward pass over `quick-xml` events builds a [`Catalog`].
//! The reader keeps an explicit element stack, so an unclosed element at
//! end of input, a missing `<TS>` root, or a message without `<source>`
//! is reported as [`I18nError::Parse`] with line and column.
//!
//! ```
//! use jyut_i18n::catalog::LoadOptions;
//! use jyut_i18n::ts;
//!
//! let doc = r#"<?xml version="1.0" encoding="utf-8"?>
//! <!DOCTYPE TS>
//! <TS version="2.1" language="yue_HK" sourcelanguage="en_CA">
//! <context>
//!     <name>NoUpdateDialog</name>
//!     <message>
//!         <source>No update found!</source>
//!         <translation>冇搵到可用嘅更新!</translation>
//!     </message>
//! </context>
//! </TS>"#;
//!
//! let catalog = ts::parse_str(doc, None, LoadOptions::default()).unwrap();
//! assert_eq!(catalog.locale().to_string(), "yue_HK");
//! assert_eq!(
//!     catalog.translate("NoUpdateDialog", "No update found!", None),
//!     Some("冇搵到可用嘅更新!")
//! );
//! ```

use std::collections::HashMap;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::catalog::{
    Catalog, CatalogBuilder, CatalogHeader, LoadOptions, Location, Message, Translation,
    TranslationStatus,
};
use crate::error::I18nError;
use crate::locale::LocaleTag;

/// Parse a `.ts` document held in memory.
///
/// `locale` names the catalog; when `None`, the root's `language`
/// attribute is used.
pub fn parse_str(
    input: &str,
    locale: Option<LocaleTag>,
    options: LoadOptions,
) -> Result<Catalog, I18nError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    TsReader::new(input, locale, options).run()
}

/// Read and parse a `.ts` file.
pub fn parse_file(
    path: &Path,
    locale: Option<LocaleTag>,
    options: LoadOptions,
) -> Result<Catalog, I18nError> {
    let _span = tracing::info_span!(
        "catalog_load",
        path = %path.display(),
        locale = locale.as_ref().map(ToString::to_string).unwrap_or_default(),
    )
    .entered();

    let bytes = std::fs::read(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode(&bytes).map_err(|e| e.with_path(path))?;
    let catalog = parse_str(text, locale, options).map_err(|e| e.with_path(path))?;

    let stats = catalog.stats();
    tracing::debug!(
        locale = %catalog.locale(),
        contexts = stats.contexts,
        messages = stats.messages,
        active = stats.active,
        duplicates = stats.duplicates,
        "catalog parsed"
    );
    Ok(catalog)
}

/// Undecodable bytes are a malformed document, not an I/O failure.
fn decode(bytes: &[u8]) -> Result<&str, I18nError> {
    std::str::from_utf8(bytes).map_err(|err| {
        let valid = &bytes[..err.valid_up_to()];
        let prefix = std::str::from_utf8(valid).unwrap_or_default();
        I18nError::parse_at(prefix, prefix.len(), format!("invalid UTF-8: {err}"))
    })
}

// ---------------------------------------------------------------------------
// Reader state
// ---------------------------------------------------------------------------

/// Elements whose character data the reader keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ContextName,
    Source,
    OldSource,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    Form,
}

#[derive(Debug)]
struct Capture {
    field: Field,
    /// Stack depth of the capturing element's parent.
    depth: usize,
    text: String,
}

#[derive(Debug, Default)]
struct ContextDraft {
    name: Option<String>,
    messages: Vec<Message>,
}

#[derive(Debug, Default)]
struct MessageDraft {
    message: Message,
    numerus: bool,
    has_source: bool,
    text: String,
    forms: Vec<String>,
}

struct TsReader<'a> {
    input: &'a str,
    reader: Reader<&'a [u8]>,
    locale: Option<LocaleTag>,
    options: LoadOptions,
    builder: Option<CatalogBuilder>,
    stack: Vec<Vec<u8>>,
    capture: Option<Capture>,
    context: Option<ContextDraft>,
    message: Option<MessageDraft>,
    last_file: Option<String>,
    last_line: HashMap<Option<String>, i64>,
}

impl<'a> TsReader<'a> {
    fn new(input: &'a str, locale: Option<LocaleTag>, options: LoadOptions) -> Self {
        Self {
            input,
            reader: Reader::from_str(input),
            locale,
            options,
            builder: None,
            stack: Vec::new(),
            capture: None,
            context: None,
            message: None,
            last_file: None,
            last_line: HashMap::new(),
        }
    }

    fn error(&self, message: impl Into<String>) -> I18nError {
        let pos = usize::try_from(self.reader.buffer_position()).unwrap_or(usize::MAX);
        I18nError::parse_at(self.input, pos, message)
    }

    fn run(mut self) -> Result<Catalog, I18nError> {
        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    let pos = usize::try_from(self.reader.error_position()).unwrap_or(usize::MAX);
                    return Err(I18nError::parse_at(self.input, pos, e.to_string()));
                }
            };
            match event {
                Event::Start(e) => {
                    self.open(&e)?;
                    self.stack.push(e.name().as_ref().to_vec());
                }
                Event::Empty(e) => {
                    self.open(&e)?;
                    self.stack.push(e.name().as_ref().to_vec());
                    self.close()?;
                }
                Event::End(_) => self.close()?,
                Event::Text(e) => {
                    if self.capture.is_some() {
                        let text = e.unescape().map_err(|err| self.error(err.to_string()))?;
                        if let Some(capture) = self.capture.as_mut() {
                            capture.text.push_str(&text);
                        }
                    }
                }
                Event::CData(e) => {
                    if self.capture.is_some() {
                        let bytes = e.into_inner();
                        let text = std::str::from_utf8(&bytes)
                            .map_err(|err| self.error(err.to_string()))?
                            .to_string();
                        if let Some(capture) = self.capture.as_mut() {
                            capture.text.push_str(&text);
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = self.stack.last() {
            let name = String::from_utf8_lossy(open).into_owned();
            return Err(self.error(format!("unexpected end of document: <{name}> is not closed")));
        }
        self.builder
            .map(CatalogBuilder::finish)
            .ok_or_else(|| I18nError::parse_at(self.input, self.input.len(), "missing <TS> root element"))
    }

    /// Handle an opening or self-closing tag before it is pushed.
    fn open(&mut self, e: &BytesStart<'_>) -> Result<(), I18nError> {
        let name = e.name();
        let name = name.as_ref();
        let depth = self.stack.len();
        let parent = self.stack.last().cloned();

        match (parent.as_deref(), name) {
            (None, _) if self.builder.is_some() => {
                return Err(self.error("content after the <TS> root element"));
            }
            (None, b"TS") => self.open_root(e)?,
            (None, other) => {
                let other = String::from_utf8_lossy(other).into_owned();
                return Err(self.error(format!("expected <TS> root element, found <{other}>")));
            }
            (Some(b"TS"), b"context") => self.context = Some(ContextDraft::default()),
            (Some(b"context"), b"name") => self.begin(Field::ContextName, depth),
            (Some(b"context"), b"message") => {
                let numerus = self.attr(e, b"numerus")?.as_deref() == Some("yes");
                self.message = Some(MessageDraft {
                    numerus,
                    ..MessageDraft::default()
                });
            }
            (Some(b"message"), b"source") => self.begin(Field::Source, depth),
            (Some(b"message"), b"oldsource") => self.begin(Field::OldSource, depth),
            (Some(b"message"), b"comment") => self.begin(Field::Comment, depth),
            (Some(b"message"), b"extracomment") => self.begin(Field::ExtraComment, depth),
            (Some(b"message"), b"translatorcomment") => {
                self.begin(Field::TranslatorComment, depth);
            }
            (Some(b"message"), b"location") => self.location(e)?,
            (Some(b"message"), b"translation") => {
                let status = self
                    .attr(e, b"type")?
                    .map_or(TranslationStatus::Finished, |t| TranslationStatus::from_attr(&t));
                if let Some(draft) = self.message.as_mut() {
                    draft.message.status = status;
                }
                self.begin(Field::Translation, depth);
            }
            (Some(b"translation"), b"numerusform" | b"lengthvariant") => {
                self.begin(Field::Form, depth);
            }
            (Some(_), b"byte") => {
                let value = self.attr(e, b"value")?.unwrap_or_default();
                let ch = parse_byte_value(&value)
                    .ok_or_else(|| self.error(format!("invalid <byte value=\"{value}\">")))?;
                if let Some(capture) = self.capture.as_mut() {
                    capture.text.push(ch);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn open_root(&mut self, e: &BytesStart<'_>) -> Result<(), I18nError> {
        let header = CatalogHeader {
            version: self.attr(e, b"version")?,
            language: self.attr(e, b"language")?,
            source_language: self.attr(e, b"sourcelanguage")?,
        };
        let locale = match self.locale.take() {
            Some(locale) => locale,
            None => {
                let declared = header
                    .language
                    .as_deref()
                    .ok_or_else(|| self.error("<TS> has no language attribute and no locale was given"))?;
                LocaleTag::parse(declared)?
            }
        };
        let mut builder = Catalog::builder(locale, self.options);
        builder.set_header(header);
        self.builder = Some(builder);
        Ok(())
    }

    fn begin(&mut self, field: Field, depth: usize) {
        self.capture = Some(Capture {
            field,
            depth,
            text: String::new(),
        });
    }

    fn location(&mut self, e: &BytesStart<'_>) -> Result<(), I18nError> {
        let file = self.attr(e, b"filename")?;
        let line = self.attr(e, b"line")?;

        let file = match file {
            Some(f) => {
                self.last_file = Some(f.clone());
                Some(f)
            }
            None => self.last_file.clone(),
        };

        let line = match line {
            Some(raw) => {
                let raw = raw.trim();
                let relative = raw.starts_with('+') || raw.starts_with('-');
                let value: i64 = raw
                    .parse()
                    .map_err(|_| self.error(format!("invalid location line \"{raw}\"")))?;
                let resolved = if relative {
                    let previous = self.last_line.get(&file).copied().unwrap_or(0);
                    previous
                        .checked_add(value)
                        .ok_or_else(|| self.error(format!("location line \"{raw}\" out of range")))?
                } else {
                    value
                };
                self.last_line.insert(file.clone(), resolved);
                Some(resolved)
            }
            None => None,
        };

        if let Some(draft) = self.message.as_mut() {
            draft.message.locations.push(Location { file, line });
        }
        Ok(())
    }

    /// Handle a closing tag: pop the stack and commit finished pieces.
    fn close(&mut self) -> Result<(), I18nError> {
        let Some(name) = self.stack.pop() else {
            return Err(self.error("closing tag without matching opening tag"));
        };
        let depth = self.stack.len();

        if self.capture.as_ref().is_some_and(|c| c.depth == depth) {
            if let Some(capture) = self.capture.take() {
                self.commit(capture);
            }
        }

        match name.as_slice() {
            b"message" if self.stack.last().map(Vec::as_slice) == Some(b"context") => {
                self.finish_message()?;
            }
            b"context" if depth == 1 => self.finish_context()?,
            _ => {}
        }
        Ok(())
    }

    fn commit(&mut self, capture: Capture) {
        let text = capture.text;
        if capture.field == Field::ContextName {
            if let Some(ctx) = self.context.as_mut() {
                ctx.name = Some(text);
            }
            return;
        }
        let Some(draft) = self.message.as_mut() else {
            return;
        };
        match capture.field {
            Field::ContextName => {}
            Field::Source => {
                draft.message.source = text;
                draft.has_source = true;
            }
            Field::OldSource => draft.message.old_source = Some(text),
            Field::Comment => draft.message.disambiguation = Some(text).filter(|c| !c.is_empty()),
            Field::ExtraComment => draft.message.extra_comment = Some(text),
            Field::TranslatorComment => draft.message.translator_comment = Some(text),
            Field::Translation => draft.text = text,
            Field::Form => draft.forms.push(text),
        }
    }

    fn finish_message(&mut self) -> Result<(), I18nError> {
        let Some(draft) = self.message.take() else {
            return Ok(());
        };
        if !draft.has_source {
            return Err(self.error("<message> has no <source>"));
        }
        let mut message = draft.message;
        message.translation = if draft.numerus {
            Translation::Numerus(draft.forms)
        } else if let Some(first) = draft.forms.into_iter().next() {
            // Length variants: the first one is the preferred text.
            Translation::Text(first)
        } else {
            Translation::Text(draft.text)
        };
        if let Some(ctx) = self.context.as_mut() {
            ctx.messages.push(message);
        }
        Ok(())
    }

    fn finish_context(&mut self) -> Result<(), I18nError> {
        let Some(ctx) = self.context.take() else {
            return Ok(());
        };
        let Some(name) = ctx.name else {
            return Err(self.error("<context> has no <name>"));
        };
        let builder = self
            .builder
            .as_mut()
            .ok_or_else(|| I18nError::parse_at(self.input, 0, "<context> outside <TS>"))?;
        builder.ensure_context(&name);
        for message in ctx.messages {
            builder.push(&name, message)?;
        }
        Ok(())
    }

    fn attr(&self, e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, I18nError> {
        let attr = e
            .try_get_attribute(key)
            .map_err(|err| self.error(err.to_string()))?;
        match attr {
            Some(a) => {
                let value = a.unescape_value().map_err(|err| self.error(err.to_string()))?;
                Ok(Some(value.into_owned()))
            }
            None => Ok(None),
        }
    }
}

/// Decode `<byte value="...">`: `x1b` / `X1B` hex, otherwise decimal.
fn parse_byte_value(value: &str) -> Option<char> {
    let code = match value.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DuplicatePolicy, TranslationStatus};

    fn wrap(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n\
             <TS version=\"2.1\" language=\"zh_TW\" sourcelanguage=\"en_CA\">\n{body}\n</TS>\n"
        )
    }

    fn parse(body: &str) -> Catalog {
        parse_str(&wrap(body), None, LoadOptions::default()).unwrap()
    }

    #[test]
    fn header_attributes_are_recorded() {
        let c = parse("");
        assert_eq!(c.header().version.as_deref(), Some("2.1"));
        assert_eq!(c.header().language.as_deref(), Some("zh_TW"));
        assert_eq!(c.header().source_language.as_deref(), Some("en_CA"));
        assert_eq!(c.locale().to_string(), "zh_TW");
    }

    #[test]
    fn explicit_locale_overrides_declared_language() {
        let tag = LocaleTag::parse("zh_Hant").unwrap();
        let c = parse_str(&wrap(""), Some(tag.clone()), LoadOptions::default()).unwrap();
        assert_eq!(c.locale(), &tag);
        assert_eq!(c.header().language.as_deref(), Some("zh_TW"));
    }

    #[test]
    fn entities_and_whitespace_are_preserved() {
        let c = parse(
            "<context><name>MainWindow</name><message>\
             <source>&amp;File</source><translation>  檔案 &lt;F&gt; </translation>\
             </message></context>",
        );
        assert_eq!(c.translate("MainWindow", "&File", None), Some("  檔案 <F> "));
    }

    #[test]
    fn multiline_text() {
        let c = parse(
            "<context><name>strings</name><message>\
             <source>Unable to use text to speech.\n\nDebug: Locale: %1</source>\
             <translation>播放失敗\n\n除錯: 地區設定: %1</translation>\
             </message></context>",
        );
        assert_eq!(
            c.translate("strings", "Unable to use text to speech.\n\nDebug: Locale: %1", None),
            Some("播放失敗\n\n除錯: 地區設定: %1")
        );
    }

    #[test]
    fn statuses_and_comments() {
        let c = parse(
            r#"<context><name>QMessageBox</name>
            <message>
                <source>Old</source>
                <translation type="obsolete">舊</translation>
            </message>
            <message>
                <source>Later</source>
                <translation type="unfinished"></translation>
            </message>
            <message>
                <source>Open</source>
                <comment>file menu</comment>
                <extracomment>Shown in the File menu</extracomment>
                <translatorcomment>Checked with reviewers</translatorcomment>
                <translation>開啟檔案</translation>
            </message>
            </context>"#,
        );
        let ctx = c.context("QMessageBox").unwrap();
        assert_eq!(ctx.messages()[0].status, TranslationStatus::Obsolete);
        assert_eq!(ctx.messages()[1].status, TranslationStatus::Unfinished);
        let open = &ctx.messages()[2];
        assert_eq!(open.disambiguation.as_deref(), Some("file menu"));
        assert_eq!(open.extra_comment.as_deref(), Some("Shown in the File menu"));
        assert_eq!(open.translator_comment.as_deref(), Some("Checked with reviewers"));

        assert_eq!(c.translate("QMessageBox", "Old", None), None);
        assert_eq!(c.translate("QMessageBox", "Later", None), None);
        assert_eq!(c.translate("QMessageBox", "Open", Some("file menu")), Some("開啟檔案"));
    }

    #[test]
    fn numerus_forms() {
        let c = parse(
            r#"<context><name>SearchHistoryTab</name>
            <message numerus="yes">
                <source>%n result(s)</source>
                <translation>
                    <numerusform>%n 個結果</numerusform>
                </translation>
            </message>
            </context>"#,
        );
        let m = &c.context("SearchHistoryTab").unwrap().messages()[0];
        assert_eq!(m.translation, Translation::Numerus(vec!["%n 個結果".into()]));
        assert_eq!(c.translate_plural("SearchHistoryTab", "%n result(s)", None, 4), Some("%n 個結果"));
    }

    #[test]
    fn length_variants_use_first() {
        let c = parse(
            r#"<context><name>T</name><message><source>Preferences</source>
            <translation variants="yes"><lengthvariant>偏好設定…</lengthvariant><lengthvariant>設定</lengthvariant></translation>
            </message></context>"#,
        );
        assert_eq!(c.translate("T", "Preferences", None), Some("偏好設定…"));
    }

    #[test]
    fn byte_elements_decode_control_chars() {
        let c = parse(
            r#"<context><name>T</name><message><source>a<byte value="x9"/>b</source>
            <translation>甲<byte value="9"/>乙</translation></message></context>"#,
        );
        assert_eq!(c.translate("T", "a\tb", None), Some("甲\t乙"));
    }

    #[test]
    fn relative_locations_resolve() {
        let c = parse(
            r#"<context><name>QMessageBox</name>
            <message>
                <location filename="../src/gui/dialogs/qmessagebox.cpp" line="+100"/>
                <location line="+2"/>
                <source>OK</source>
                <translation>确定</translation>
            </message>
            <message>
                <location line="-50"/>
                <location filename="../src/gui/dialogs/qmessagebox.h" line="10"/>
                <source>Help</source>
                <translation>帮助</translation>
            </message>
            </context>"#,
        );
        let ctx = c.context("QMessageBox").unwrap();
        let cpp = Some("../src/gui/dialogs/qmessagebox.cpp".to_string());
        assert_eq!(
            ctx.messages()[0].locations,
            vec![
                Location { file: cpp.clone(), line: Some(100) },
                Location { file: cpp.clone(), line: Some(102) },
            ]
        );
        assert_eq!(ctx.messages()[1].locations[0], Location { file: cpp, line: Some(52) });
        assert_eq!(ctx.messages()[1].locations[1].line, Some(10));
    }

    #[test]
    fn cdata_is_text() {
        let c = parse(
            "<context><name>T</name><message><source><![CDATA[<b>Bold</b>]]></source>\
             <translation><![CDATA[<b>粗體</b>]]></translation></message></context>",
        );
        assert_eq!(c.translate("T", "<b>Bold</b>", None), Some("<b>粗體</b>"));
    }

    #[test]
    fn unknown_elements_are_skipped() {
        let c = parse(
            "<dependencies><dependency catalog=\"qtbase\"/></dependencies>\
             <context><name>T</name><encoding>UTF-8</encoding><message><source>a</source>\
             <userdata>x</userdata><translation>甲</translation></message></context>",
        );
        assert_eq!(c.translate("T", "a", None), Some("甲"));
    }

    #[test]
    fn bom_is_ignored() {
        let doc = format!("\u{feff}{}", wrap(""));
        assert!(parse_str(&doc, None, LoadOptions::default()).is_ok());
    }

    #[test]
    fn empty_root_is_an_empty_catalog() {
        let c = parse_str("<TS language=\"yue\"/>", None, LoadOptions::default()).unwrap();
        assert!(c.contexts().is_empty());
    }

    #[test]
    fn duplicate_policy_applies() {
        let body = "<context><name>T</name>\
            <message><source>OK</source><translation>好</translation></message>\
            <message><source>OK</source><translation>確定</translation></message></context>";
        let c = parse(body);
        assert_eq!(c.translate("T", "OK", None), Some("好"));
        assert_eq!(c.duplicates().len(), 1);

        let strict = LoadOptions {
            duplicates: DuplicatePolicy::Reject,
            ..LoadOptions::default()
        };
        let err = parse_str(&wrap(body), None, strict).unwrap_err();
        assert!(matches!(err, I18nError::DuplicateKey { .. }));
    }

    fn parse_err(doc: &str) -> I18nError {
        parse_str(doc, None, LoadOptions::default()).unwrap_err()
    }

    #[test]
    fn malformed_documents_fail() {
        for doc in [
            "",
            "not xml at all",
            "<TS language=\"zh\"><context><name>T</name>",
            "<TS language=\"zh\"><context></TS>",
            "<root/>",
            "<TS language=\"zh\"><context><message><source>a</source></message></context></TS>",
            "<TS language=\"zh\"><context><name>T</name><message><translation>x</translation></message></context></TS>",
            "<TS language=\"yue\"><context><name>T</name></context></TS><TS language=\"zh\"/>",
            "<TS language=\"yue\"></TS><context><name>T</name></context>",
        ] {
            let err = parse_err(doc);
            assert!(matches!(err, I18nError::Parse { .. }), "{doc:?} gave {err:?}");
        }
    }

    #[test]
    fn second_root_does_not_replace_first() {
        let doc = "<TS language=\"yue\"><context><name>T</name>\
            <message><source>a</source><translation>x</translation></message></context></TS>\
            <TS language=\"zh\"/>";
        match parse_err(doc) {
            I18nError::Parse { message, .. } => assert!(message.contains("after the <TS> root"), "{message}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn relative_location_overflow_is_a_parse_error() {
        let body = "<context><name>T</name><message>\
            <location filename=\"a.cpp\" line=\"+9223372036854775807\"/>\
            <location line=\"+1\"/>\
            <source>a</source><translation>x</translation></message></context>";
        match parse_err(&wrap(body)) {
            I18nError::Parse { message, .. } => assert!(message.contains("out of range"), "{message}"),
            other => panic!("unexpected {other:?}"),
        }

        let body = "<context><name>T</name><message>\
            <location filename=\"a.cpp\" line=\"-9223372036854775807\"/>\
            <location line=\"-2\"/>\
            <source>a</source><translation>x</translation></message></context>";
        assert!(matches!(parse_err(&wrap(body)), I18nError::Parse { .. }));
    }

    #[test]
    fn invalid_utf8_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jyutdictionary-yue_Hant.ts");
        let mut bytes = b"<TS version=\"2.1\" language=\"yue\">\n<context><name>T</name>\
            <message><source>a</source><translation>"
            .to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE, 0x80]);
        bytes.extend_from_slice(b"</translation></message></context></TS>");
        std::fs::write(&path, &bytes).unwrap();

        match parse_file(&path, None, LoadOptions::default()).unwrap_err() {
            I18nError::Parse {
                path: Some(p),
                line,
                message,
                ..
            } => {
                assert_eq!(p, path);
                assert_eq!(line, 2);
                assert!(message.contains("UTF-8"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_language_needs_explicit_locale() {
        assert!(matches!(parse_err("<TS version=\"2.1\"/>"), I18nError::Parse { .. }));
        assert!(matches!(parse_err("<TS language=\"english\"/>"), I18nError::InvalidLocale(_)));
        let tag = LocaleTag::parse("yue_Hant").unwrap();
        assert!(parse_str("<TS version=\"2.1\"/>", Some(tag), LoadOptions::default()).is_ok());
    }

    #[test]
    fn unclosed_element_reports_position() {
        let err = parse_err("<TS language=\"zh\">\n<context>\n<name>T</name>\n");
        match err {
            I18nError::Parse { line, .. } => assert!(line >= 3, "line {line}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_byte_value_forms() {
        assert_eq!(parse_byte_value("x1b"), Some('\u{1b}'));
        assert_eq!(parse_byte_value("X1B"), Some('\u{1b}'));
        assert_eq!(parse_byte_value("10"), Some('\n'));
        assert_eq!(parse_byte_value("zz"), None);
    }
}
