use std::any::Any;
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::value::Object;
use crate::ParseError;

/// HTTP verb a Bot API method is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File contents to upload. The bytes are passed to the transport untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct InputFile {
    pub content: Vec<u8>,
    pub filename: Option<String>,
}

impl InputFile {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Reads a file from disk, using its file name for the upload.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(Self { content, filename })
    }
}

impl std::fmt::Debug for InputFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputFile")
            .field("len", &self.content.len())
            .field("filename", &self.filename)
            .finish()
    }
}

/// Either a new upload or a `file_id`/URL of a file Telegram already knows.
///
/// Uploads are not part of the serialized data; requests return them from
/// [`TelegramRequest::files`] under the parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFileOrString {
    File(InputFile),
    String(String),
}

impl InputFileOrString {
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn as_file(&self) -> Option<&InputFile> {
        match self {
            Self::File(file) => Some(file),
            Self::String(_) => None,
        }
    }
}

impl From<InputFile> for InputFileOrString {
    fn from(file: InputFile) -> Self {
        Self::File(file)
    }
}

impl From<String> for InputFileOrString {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for InputFileOrString {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl Serialize for InputFileOrString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::File(_) => serializer.serialize_none(),
            Self::String(value) => serializer.serialize_str(value),
        }
    }
}

/// Names uploads nested inside request parameters.
///
/// Each added file gets the next name `<prefix><index>` and is referenced
/// from the parameters as `attach://<name>`. The multipart body then carries
/// the file under that name. Defaults to prefix `file` starting at `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFileCollector {
    prefix: String,
    next_index: usize,
    files: Vec<(String, InputFile)>,
}

impl Default for RequestFileCollector {
    fn default() -> Self {
        Self::new("file", 0)
    }
}

impl RequestFileCollector {
    pub fn new(prefix: impl Into<String>, start_index: usize) -> Self {
        Self {
            prefix: prefix.into(),
            next_index: start_index,
            files: Vec::new(),
        }
    }

    /// Stores the file and returns its `attach://` reference.
    pub fn add(&mut self, file: InputFile) -> String {
        let name = format!("{}{}", self.prefix, self.next_index);
        self.next_index += 1;
        let reference = format!("attach://{name}");
        self.files.push((name, file));
        reference
    }

    /// Parameter value for `media`: an `attach://` reference for uploads,
    /// the `file_id` or URL unchanged otherwise.
    pub fn attach(&mut self, media: &InputFileOrString) -> String {
        match media {
            InputFileOrString::File(file) => self.add(file.clone()),
            InputFileOrString::String(value) => value.clone(),
        }
    }

    pub fn files(&self) -> &[(String, InputFile)] {
        &self.files
    }

    pub fn into_files(self) -> Vec<(String, InputFile)> {
        self.files
    }
}

/// Target chat: a numeric id or an `@channelusername`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_owned())
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(username) => f.write_str(username),
        }
    }
}

/// A Bot API call, independent of what its result parses into.
///
/// Object safe, so heterogeneous requests can be queued as
/// `Box<dyn TelegramRequest>`.
pub trait TelegramRequest: Send + Sync {
    fn http_method(&self) -> HttpMethod;

    fn api_method(&self) -> &'static str;

    /// Parameters with absent optionals omitted. Uploads are excluded.
    fn data(&self) -> Result<Object, serde_json::Error>;

    fn files(&self) -> Vec<(String, InputFile)> {
        Vec::new()
    }
}

/// A Bot API call whose `result` parses into [`TelegramMethod::Output`].
pub trait TelegramMethod: TelegramRequest {
    type Output;

    fn prepare_result(&self, result: &Value) -> Result<Self::Output, ParseError>;
}

/// Parsed output of a method whose type is only known at runtime.
///
/// Recover the concrete value with [`PreparedResult::downcast_ref`] or
/// [`PreparedResult::downcast`], using the method's `Output` type.
pub struct PreparedResult {
    value: Box<dyn ErasedOutput>,
    type_name: &'static str,
}

trait ErasedOutput: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

impl<T: Any + Debug + Send + Sync> ErasedOutput for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }
}

impl PreparedResult {
    pub fn new<T: Any + Debug + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.value).as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).as_any().downcast_ref::<T>()
    }

    /// Takes the value out, or gives `self` back when `T` is the wrong type.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        let type_name = self.type_name;
        self.value
            .into_any()
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|value| Self {
                value: Box::new(ErasedAny(value)),
                type_name,
            })
    }
}

/// Holder used only when a checked downcast still fails.
struct ErasedAny(Box<dyn Any + Send + Sync>);

impl Debug for ErasedAny {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<erased>")
    }
}

impl Debug for PreparedResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.value, f)
    }
}

/// Object-safe form of [`TelegramMethod`]: sends like any request and parses
/// its result with the method's own parser into a [`PreparedResult`].
pub trait PreparableRequest: TelegramRequest {
    fn prepare_erased(&self, result: &Value) -> Result<PreparedResult, ParseError>;

    fn as_request(&self) -> &dyn TelegramRequest;
}

impl<M> PreparableRequest for M
where
    M: TelegramMethod,
    M::Output: Any + Debug + Send + Sync,
{
    fn prepare_erased(&self, result: &Value) -> Result<PreparedResult, ParseError> {
        self.prepare_result(result).map(PreparedResult::new)
    }

    fn as_request(&self) -> &dyn TelegramRequest {
        self
    }
}

/// Serializes request parameters into a JSON object.
pub fn serialize_data<T: Serialize>(request: &T) -> Result<Object, serde_json::Error> {
    match serde_json::to_value(request)? {
        Value::Object(data) => Ok(data),
        _ => Ok(Object::new()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn input_file_from_path_uses_file_name() {
        let mut file = tempfile::Builder::new()
            .suffix(".jpg")
            .tempfile()
            .expect("temp file");
        file.write_all(b"jpeg-bytes").expect("write");

        let input = InputFile::from_path(file.path()).expect("readable");
        assert_eq!(input.content, b"jpeg-bytes");
        assert!(input
            .filename
            .as_deref()
            .is_some_and(|name| name.ends_with(".jpg")));
    }

    #[test]
    fn debug_output_hides_file_contents() {
        let input = InputFile::new(vec![1, 2, 3]).with_filename("a.bin");
        assert_eq!(
            format!("{input:?}"),
            "InputFile { len: 3, filename: Some(\"a.bin\") }"
        );
    }

    #[test]
    fn prepared_result_keeps_the_method_output_type() {
        let method = crate::methods::GetChatMemberCount {
            chat_id: ChatId::from("@group"),
        };
        let erased: &dyn PreparableRequest = &method;

        let prepared = erased
            .prepare_erased(&serde_json::json!(17))
            .expect("integer result");

        assert!(prepared.is::<i64>());
        assert_eq!(prepared.downcast_ref::<i64>(), Some(&17));
        assert_eq!(format!("{prepared:?}"), "17");
        let prepared = prepared.downcast::<String>().expect_err("wrong type");
        assert_eq!(prepared.downcast::<i64>().ok(), Some(17));
    }

    #[test]
    fn erased_prepare_reports_parse_errors() {
        let method = crate::methods::GetChatMemberCount {
            chat_id: ChatId::from("@group"),
        };

        let error = PreparableRequest::prepare_erased(&method, &serde_json::json!("17"))
            .expect_err("string result");

        assert_eq!(
            error,
            ParseError::UnexpectedResultType {
                expected: "integer",
                actual: "string"
            }
        );
    }

    fn file(name: &str) -> InputFile {
        InputFile::new(name.as_bytes().to_vec()).with_filename(name)
    }

    fn names(collector: &RequestFileCollector) -> Vec<&str> {
        collector.files().iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn collector_names_files_from_zero_by_default() {
        let mut collector = RequestFileCollector::default();

        assert_eq!(collector.add(file("a.jpg")), "attach://file0");
        assert_eq!(collector.add(file("b.jpg")), "attach://file1");

        assert_eq!(
            collector.into_files(),
            vec![
                (String::from("file0"), file("a.jpg")),
                (String::from("file1"), file("b.jpg")),
            ]
        );
    }

    #[test]
    fn collector_uses_custom_prefix_and_start_index() {
        let mut collector = RequestFileCollector::new("test", 23);

        collector.add(file("a.jpg"));
        collector.add(file("b.jpg"));

        assert_eq!(names(&collector), vec!["test23", "test24"]);
    }

    #[test]
    fn collector_only_numbers_uploads() {
        let mut collector = RequestFileCollector::default();

        let references = [
            collector.attach(&InputFileOrString::from("https://example.org/a.jpg")),
            collector.attach(&InputFileOrString::from(file("b.jpg"))),
            collector.attach(&InputFileOrString::from("AgACAgIAAxkBAAE")),
            collector.attach(&InputFileOrString::from(file("c.jpg"))),
        ];

        assert_eq!(
            references,
            [
                "https://example.org/a.jpg",
                "attach://file0",
                "AgACAgIAAxkBAAE",
                "attach://file1",
            ]
        );
        assert_eq!(names(&collector), vec!["file0", "file1"]);
    }

    #[test]
    fn chat_id_serializes_untagged() {
        assert_eq!(serde_json::to_value(ChatId::from(-100_i64)).expect("json"), serde_json::json!(-100));
        assert_eq!(
            serde_json::to_value(ChatId::from("@news")).expect("json"),
            serde_json::json!("@news")
        );
    }
}
