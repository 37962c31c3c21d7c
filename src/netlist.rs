//! The static transistor dataset a chip is built from.

use crate::error::{ NetlistError, Result };
use crate::types::{ Node, Transistor };
use serde::{ Deserialize, Deserializer, Serialize };
use std::fs::File;
use std::io::{ BufReader, BufWriter, Read, Write };
use std::path::Path;

/// Raw netlist: transistor definitions, the per-node pull-up table and the
/// two rail indices.
///
/// On disk this is a JSON object:
///
/// ```json
/// { "vss": 1, "vcc": 0, "pullup": [0, 0, 1], "transdefs": [[2, 1, 0]] }
/// ```
///
/// `pullup` entries may be booleans or 0/1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Netlist
{
    pub vss: Node,
    pub vcc: Node,
    #[serde(deserialize_with = "flags")]
    pub pullup: Vec<bool>,
    pub transdefs: Vec<Transistor>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag
{
    Bool(bool),
    Int(u8),
}

fn flags<'de, D>(deserializer: D) -> std::result::Result<Vec<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Flag>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|flag| match flag
        {
            Flag::Bool(b) => b,
            Flag::Int(i) => i != 0,
        })
        .collect())
}

impl Netlist
{
    pub fn new(transdefs: Vec<Transistor>, pullup: Vec<bool>, vss: Node, vcc: Node) -> Netlist
    {
        Netlist { vss, vcc, pullup, transdefs }
    }

    #[inline]
    pub fn nodes_count(&self) -> usize
    {
        self.pullup.len()
    }

    #[inline]
    pub fn transistors_count(&self) -> usize
    {
        self.transdefs.len()
    }

    /// Checks that every index in the dataset is in range.
    pub fn validate(&self) -> Result<()>
    {
        let nodes = self.nodes_count();
        if nodes == 0
        {
            return Err(NetlistError::Empty);
        }

        for (rail, node) in [("vss", self.vss), ("vcc", self.vcc)]
        {
            if node >= nodes
            {
                return Err(NetlistError::RailOutOfRange { rail, node, nodes });
            }
        }

        if self.vss == self.vcc
        {
            return Err(NetlistError::RailsCoincide(self.vss));
        }

        for (transistor, t) in self.transdefs.iter().enumerate()
        {
            for node in [t.gate(), t.c1(), t.c2()]
            {
                if node >= nodes
                {
                    return Err(NetlistError::NodeOutOfRange { transistor, node, nodes });
                }
            }
        }

        Ok(())
    }

    /// Reads and validates a JSON netlist.
    pub fn from_reader<R: Read>(reader: R) -> Result<Netlist>
    {
        let netlist: Netlist = serde_json::from_reader(reader)?;
        netlist.validate()?;
        Ok(netlist)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Netlist>
    {
        let file = File::open(path)?;
        Netlist::from_reader(BufReader::new(file))
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()>
    {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
