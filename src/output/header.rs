use chrono::{Local, NaiveDateTime};
use std::io::Write;
use strum::{AsRefStr, Display, EnumIter};

const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// The tables read by the simulation tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum Table {
    #[strum(serialize = "public.bus_route")]
    Route,
    #[strum(serialize = "public.bus_route_link")]
    RouteLink,
    #[strum(serialize = "public.bus_stop")]
    Stop,
    #[strum(serialize = "public.bus_frequency")]
    Frequency,
    #[strum(serialize = "public.bus_period")]
    Period,
}

impl Table {
    pub fn file_name(&self) -> String {
        format!("{self}.csv")
    }

    /// Column names, written as the first row beneath the header.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Route => &["id", "name"],
            Table::RouteLink => &["route", "sequence", "link", "stop", "dwelltime"],
            Table::Stop => &["id", "link", "name", "location"],
            Table::Frequency => &["route", "period", "frequency", "offsettime", "preemption"],
            Table::Period => &["id", "starttime", "endtime"],
        }
    }
}

/// Metadata leading every table.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub user: String,
    pub network: String,
    pub generated: NaiveDateTime,
}

impl Header {
    /// A header stamped with the current local time.
    pub fn new(user: impl Into<String>, network: impl Into<String>) -> Self {
        Self::at(user, network, Local::now().naive_local())
    }

    pub fn at(user: impl Into<String>, network: impl Into<String>, generated: NaiveDateTime) -> Self {
        Self {
            user: user.into(),
            network: network.into(),
            generated,
        }
    }

    pub fn write_to<W: Write>(&self, table: Table, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "User,{}", self.user)?;
        writeln!(writer, "Network,{}", self.network)?;
        writeln!(writer, "Table,{table}")?;
        writeln!(writer, "{}", self.generated.format(TIMESTAMP_FORMAT))?;
        writeln!(writer)
    }
}
