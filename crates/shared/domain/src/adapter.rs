use crate::error::DomainError;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumString};

/// Message flow direction of an adapter: receive locations are inbound, send ports outbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Inbound,
    Outbound,
}

/// How a WCF adapter is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WcfHosting {
    /// A dedicated WCF adapter such as `WCF-BasicHttp`.
    #[default]
    Dedicated,
    /// `WCF-Custom`, in-process.
    Custom,
    /// `WCF-CustomIsolated`, receive only, hosted by IIS.
    CustomIsolated,
}

impl WcfHosting {
    /// Suffix appended to the qualified adapter name.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Dedicated => "",
            Self::Custom => "Custom",
            Self::CustomIsolated => "CustomIsolated",
        }
    }
}

/// WCF binding carried by a WCF adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WcfBinding {
    BasicHttp,
    BasicHttpRelay,
    NetMsmq,
    NetNamedPipe,
    NetTcp,
    NetTcpRelay,
    Oracle,
    Sap,
    Sql,
    WebHttp,
    WsHttp,
    /// Any other binding, by binding element type name.
    Other(String),
}

const BINDING_ELEMENT_SUFFIX: &str = "BindingElement";

impl WcfBinding {
    /// Type name of the binding element configuring this binding.
    #[must_use]
    pub fn element_name(&self) -> &str {
        match self {
            Self::BasicHttp => "BasicHttpBindingElement",
            Self::BasicHttpRelay => "BasicHttpRelayBindingElement",
            Self::NetMsmq => "NetMsmqBindingElement",
            Self::NetNamedPipe => "NetNamedPipeBindingElement",
            Self::NetTcp => "NetTcpBindingElement",
            Self::NetTcpRelay => "NetTcpRelayBindingElement",
            Self::Oracle => "OracleDBBindingElement",
            Self::Sap => "SapBindingElement",
            Self::Sql => "SqlAdapterBindingElement",
            Self::WebHttp => "WebHttpBindingElement",
            Self::WsHttp => "WSHttpBindingElement",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Parses a binding name (`NetTcp`) or binding element type name (`NetTcpBindingElement`).
    ///
    /// Unknown names are kept verbatim as [`WcfBinding::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        let lower = trimmed.to_ascii_lowercase();
        let key = lower.strip_suffix("bindingelement").unwrap_or(&lower);
        match key {
            "basichttp" => Self::BasicHttp,
            "basichttprelay" => Self::BasicHttpRelay,
            "netmsmq" => Self::NetMsmq,
            "netnamedpipe" => Self::NetNamedPipe,
            "nettcp" => Self::NetTcp,
            "nettcprelay" => Self::NetTcpRelay,
            "oracle" | "oracledb" => Self::Oracle,
            "sap" => Self::Sap,
            "sql" | "sqladapter" => Self::Sql,
            "webhttp" => Self::WebHttp,
            "wshttp" => Self::WsHttp,
            _ => Self::Other(trimmed.to_owned()),
        }
    }

    /// Name used in adapter and host names: the element name without its `BindingElement`
    /// suffix, except for the line-of-business bindings.
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self {
            Self::Oracle => "Oracle",
            Self::Sap => "Sap",
            Self::Sql => "Sql",
            other => {
                let element = other.element_name();
                element.strip_suffix(BINDING_ELEMENT_SUFFIX).unwrap_or(element)
            },
        }
    }

    const fn dedicated_protocol(&self) -> Option<&'static str> {
        Some(match self {
            Self::BasicHttp => "WCF-BasicHttp",
            Self::BasicHttpRelay => "WCF-BasicHttpRelay",
            Self::NetMsmq => "WCF-NetMsmq",
            Self::NetNamedPipe => "WCF-NetNamedPipe",
            Self::NetTcp => "WCF-NetTcp",
            Self::NetTcpRelay => "WCF-NetTcpRelay",
            Self::Oracle => "WCF-OracleDB",
            Self::Sap => "WCF-SAP",
            Self::Sql => "WCF-SQL",
            Self::WebHttp => "WCF-WebHttp",
            Self::WsHttp => "WCF-WSHttp",
            Self::Other(_) => return None,
        })
    }
}

/// Adapter kinds known to the zone classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    File,
    Ftp,
    Http,
    Office365Email,
    Pop3,
    SbMessaging,
    Sftp,
    Wcf { binding: WcfBinding, hosting: WcfHosting },
    /// An adapter the classifier does not know, by type name.
    Other(String),
}

impl AdapterKind {
    #[must_use]
    pub const fn wcf(binding: WcfBinding) -> Self {
        Self::Wcf { binding, hosting: WcfHosting::Dedicated }
    }

    #[must_use]
    pub const fn wcf_custom(binding: WcfBinding) -> Self {
        Self::Wcf { binding, hosting: WcfHosting::Custom }
    }

    #[must_use]
    pub const fn wcf_custom_isolated(binding: WcfBinding) -> Self {
        Self::Wcf { binding, hosting: WcfHosting::CustomIsolated }
    }

    /// Type name of a non-WCF adapter (`FileAdapter`, `SBMessagingAdapter`).
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        Some(match self {
            Self::File => "FileAdapter",
            Self::Ftp => "FtpAdapter",
            Self::Http => "HttpAdapter",
            Self::Office365Email => "Office365EmailAdapter",
            Self::Pop3 => "Pop3Adapter",
            Self::SbMessaging => "SBMessagingAdapter",
            Self::Sftp => "SftpAdapter",
            Self::Other(name) => name.as_str(),
            Self::Wcf { .. } => return None,
        })
    }

    /// BizTalk transport protocol name, e.g. `File`, `WCF-SQL` or `WCF-Custom`.
    #[must_use]
    pub fn protocol(&self) -> Cow<'_, str> {
        let name = match self {
            Self::File => "File",
            Self::Ftp => "Ftp",
            Self::Http => "Http",
            Self::Office365Email => "Office365Email",
            Self::Pop3 => "Pop3",
            Self::SbMessaging => "SBMessaging",
            Self::Sftp => "Sftp",
            Self::Wcf { hosting: WcfHosting::Custom, .. } => "WCF-Custom",
            Self::Wcf { hosting: WcfHosting::CustomIsolated, .. } => "WCF-CustomIsolated",
            Self::Wcf { binding, hosting: WcfHosting::Dedicated } => match binding
                .dedicated_protocol()
            {
                Some(protocol) => protocol,
                None => return Cow::Owned(format!("WCF-{}", binding.short_name())),
            },
            Self::Other(name) => return Cow::Borrowed(name),
        };
        Cow::Borrowed(name)
    }

    /// Parses a transport protocol name, ignoring case.
    ///
    /// `binding` is required by `WCF-Custom` and `WCF-CustomIsolated` and rejected elsewhere.
    /// Unknown protocols become [`AdapterKind::Other`] and fail later, at classification.
    ///
    /// # Errors
    /// [`DomainError::Parse`] for a missing or misplaced binding.
    pub fn from_protocol(protocol: &str, binding: Option<&str>) -> Result<Self, DomainError> {
        let protocol = protocol.trim();
        let lower = protocol.to_ascii_lowercase();

        let custom = match lower.as_str() {
            "wcf-custom" => Some(WcfHosting::Custom),
            "wcf-customisolated" => Some(WcfHosting::CustomIsolated),
            _ => None,
        };
        if let Some(hosting) = custom {
            let binding = binding.filter(|b| !b.trim().is_empty()).ok_or_else(|| {
                DomainError::Parse {
                    message: format!("protocol '{protocol}' requires a binding").into(),
                    context: None,
                }
            })?;
            return Ok(Self::Wcf { binding: WcfBinding::parse(binding), hosting });
        }

        if let Some(binding) = binding {
            return Err(DomainError::Parse {
                message: format!(
                    "binding '{binding}' is only allowed with WCF-Custom or WCF-CustomIsolated, not '{protocol}'"
                )
                .into(),
                context: None,
            });
        }

        Ok(match lower.as_str() {
            "file" => Self::File,
            "ftp" => Self::Ftp,
            "http" => Self::Http,
            "office365email" | "office365 outlook email" => Self::Office365Email,
            "pop3" => Self::Pop3,
            "sbmessaging" => Self::SbMessaging,
            "sftp" => Self::Sftp,
            "wcf-basichttp" => Self::wcf(WcfBinding::BasicHttp),
            "wcf-basichttprelay" => Self::wcf(WcfBinding::BasicHttpRelay),
            "wcf-netmsmq" => Self::wcf(WcfBinding::NetMsmq),
            "wcf-netnamedpipe" => Self::wcf(WcfBinding::NetNamedPipe),
            "wcf-nettcp" => Self::wcf(WcfBinding::NetTcp),
            "wcf-nettcprelay" => Self::wcf(WcfBinding::NetTcpRelay),
            "wcf-oracledb" => Self::wcf(WcfBinding::Oracle),
            "wcf-sap" => Self::wcf(WcfBinding::Sap),
            "wcf-sql" => Self::wcf(WcfBinding::Sql),
            "wcf-webhttp" => Self::wcf(WcfBinding::WebHttp),
            "wcf-wshttp" => Self::wcf(WcfBinding::WsHttp),
            _ => Self::Other(protocol.to_owned()),
        })
    }
}

impl Display for AdapterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.protocol())
    }
}

/// Adapter descriptor: kind, direction and the protocol facts host resolution depends on.
///
/// The facts default from the adapter kind and can be overridden when the caller knows
/// better (e.g. from adapter metadata).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Adapter {
    kind: AdapterKind,
    direction: Direction,
    isolated_receive_handler: bool,
    x86_only: bool,
}

impl Adapter {
    #[must_use]
    pub fn new(kind: AdapterKind, direction: Direction) -> Self {
        let isolated_receive_handler = default_isolated_receive_handler(&kind, direction);
        let x86_only = matches!(kind, AdapterKind::Pop3);
        Self { kind, direction, isolated_receive_handler, x86_only }
    }

    #[must_use]
    pub fn inbound(kind: AdapterKind) -> Self {
        Self::new(kind, Direction::Inbound)
    }

    #[must_use]
    pub fn outbound(kind: AdapterKind) -> Self {
        Self::new(kind, Direction::Outbound)
    }

    #[must_use]
    pub const fn with_isolated_receive_handler(mut self, isolated: bool) -> Self {
        self.isolated_receive_handler = isolated;
        self
    }

    #[must_use]
    pub const fn with_x86_only(mut self, x86_only: bool) -> Self {
        self.x86_only = x86_only;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> &AdapterKind {
        &self.kind
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The adapter's receive handler must run in an isolated (IIS) host.
    #[must_use]
    pub const fn requires_isolated_receive_handler(&self) -> bool {
        self.isolated_receive_handler
    }

    /// The adapter can only run in a 32-bit host.
    #[must_use]
    pub const fn is_x86_only(&self) -> bool {
        self.x86_only
    }

    #[must_use]
    pub const fn is_inbound(&self) -> bool {
        matches!(self.direction, Direction::Inbound)
    }

    #[must_use]
    pub const fn wcf_hosting(&self) -> Option<WcfHosting> {
        match &self.kind {
            AdapterKind::Wcf { hosting, .. } => Some(*hosting),
            _ => None,
        }
    }
}

impl Display for Adapter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.direction)
    }
}

fn default_isolated_receive_handler(kind: &AdapterKind, direction: Direction) -> bool {
    if direction != Direction::Inbound {
        return false;
    }
    match kind {
        AdapterKind::Http | AdapterKind::Wcf { hosting: WcfHosting::CustomIsolated, .. } => true,
        AdapterKind::Wcf { binding, hosting: WcfHosting::Dedicated } => matches!(
            binding,
            WcfBinding::BasicHttp
                | WcfBinding::BasicHttpRelay
                | WcfBinding::WebHttp
                | WcfBinding::WsHttp
        ),
        _ => false,
    }
}
