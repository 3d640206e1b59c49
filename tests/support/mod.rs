//! Hand-written stand-ins for code-generator output.
//!
//! A real embedder generates these from a parsed EXPRESS schema (out of scope here, per
//! SPEC_FULL.md §1). The five entity types below and the `IfcValue` select mirror the
//! literal scenarios in `original_source/step/test/entry_parser_test.cc`, just enough of
//! IFC2X3 to exercise every decoder, the resolver, and round-trip emission.

use express_step::step::write::{write_enum, write_list, write_real, write_reference, write_string};
use express_step::{
    decode_enum, decode_integer, decode_list, decode_optional, decode_optional_reference,
    decode_reference, decode_reference_placeholder, decode_string, decode_typed_wrapper_name,
    Container, DecodeEntity, ParseError, PlaceholderIndex, Reference, RootEntity, WriteContext,
};
use std::any::Any;
use strum_macros::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum IfcChangeActionEnum {
    NOCHANGE,
    MODIFIED,
    ADDED,
    DELETED,
    NOTDEFINED,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum IfcUnitEnum {
    LENGTHUNIT,
    AREAUNIT,
    VOLUMEUNIT,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum IfcSiPrefix {
    MILLI,
    CENTI,
    KILO,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum IfcSiUnitName {
    METRE,
    GRAM,
    SECOND,
}

pub struct IfcCartesianPoint {
    line_idx: u64,
    pub coordinates: Vec<f64>,
}
impl DecodeEntity for IfcCartesianPoint {
    const NAME: &'static str = "IFCCARTESIANPOINT";
    fn decode(c: &mut express_step::Cursor) -> Result<Self, ParseError> {
        let coordinates = decode_list(c, |c| c.parse_real())?;
        Ok(Self {
            line_idx: 0,
            coordinates,
        })
    }
}
impl RootEntity for IfcCartesianPoint {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn line_idx(&self) -> u64 {
        self.line_idx
    }
    fn set_line_idx(&mut self, idx: u64) {
        self.line_idx = idx;
    }
    fn resolve(&mut self, _index: &PlaceholderIndex) {}
    fn write(&self, _ctx: &WriteContext, _container: &Container, out: &mut String) {
        write_list(out, &self.coordinates, |out, v| write_real(out, *v));
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct IfcOwnerHistory {
    line_idx: u64,
    pub owning_user: Reference<IfcOwnerHistory>,
    pub owning_application: Reference<IfcOwnerHistory>,
    pub state: Option<String>,
    pub change_action: IfcChangeActionEnum,
    pub last_modified_date: Option<i64>,
    pub last_modifying_user: Option<Reference<IfcOwnerHistory>>,
    pub last_modifying_application: Option<Reference<IfcOwnerHistory>>,
    pub creation_date: i64,
}
impl DecodeEntity for IfcOwnerHistory {
    const NAME: &'static str = "IFCOWNERHISTORY";
    fn decode(c: &mut express_step::Cursor) -> Result<Self, ParseError> {
        let owning_user = decode_reference(c)?;
        c.consume(b',')?;
        let owning_application = decode_reference(c)?;
        c.consume(b',')?;
        let state = decode_optional(c, decode_string)?;
        c.consume(b',')?;
        let change_action = decode_enum(c, "IfcChangeActionEnum")?;
        c.consume(b',')?;
        let last_modified_date = decode_optional(c, decode_integer)?;
        c.consume(b',')?;
        let last_modifying_user = decode_optional_reference(c)?;
        c.consume(b',')?;
        let last_modifying_application = decode_optional_reference(c)?;
        c.consume(b',')?;
        let creation_date = decode_integer(c)?;
        Ok(Self {
            line_idx: 0,
            owning_user,
            owning_application,
            state,
            change_action,
            last_modified_date,
            last_modifying_user,
            last_modifying_application,
            creation_date,
        })
    }
}
impl RootEntity for IfcOwnerHistory {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn line_idx(&self) -> u64 {
        self.line_idx
    }
    fn set_line_idx(&mut self, idx: u64) {
        self.line_idx = idx;
    }
    fn resolve(&mut self, index: &PlaceholderIndex) {
        self.owning_user.resolve(index);
        self.owning_application.resolve(index);
        if let Some(r) = &mut self.last_modifying_user {
            r.resolve(index);
        }
        if let Some(r) = &mut self.last_modifying_application {
            r.resolve(index);
        }
    }
    fn write(&self, _ctx: &WriteContext, container: &Container, out: &mut String) {
        write_reference(out, &self.owning_user, container);
        out.push(',');
        write_reference(out, &self.owning_application, container);
        out.push(',');
        match &self.state {
            Some(s) => write_string(out, s),
            None => out.push('$'),
        }
        out.push(',');
        write_enum(out, format!("{:?}", self.change_action).as_str());
        out.push(',');
        match self.last_modified_date {
            Some(v) => out.push_str(&v.to_string()),
            None => out.push('$'),
        }
        out.push(',');
        match &self.last_modifying_user {
            Some(r) => write_reference(out, r, container),
            None => out.push('$'),
        }
        out.push(',');
        match &self.last_modifying_application {
            Some(r) => write_reference(out, r, container),
            None => out.push('$'),
        }
        out.push(',');
        out.push_str(&self.creation_date.to_string());
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct IfcSiUnit {
    line_idx: u64,
    pub dimensions: Reference<IfcSiUnit>,
    pub unit_type: IfcUnitEnum,
    pub prefix: Option<IfcSiPrefix>,
    pub name: IfcSiUnitName,
}
impl DecodeEntity for IfcSiUnit {
    const NAME: &'static str = "IFCSIUNIT";
    fn decode(c: &mut express_step::Cursor) -> Result<Self, ParseError> {
        let dimensions = decode_reference(c)?;
        c.consume(b',')?;
        let unit_type = decode_enum(c, "IfcUnitEnum")?;
        c.consume(b',')?;
        let prefix = decode_optional(c, |c| decode_enum(c, "IfcSiPrefix"))?;
        c.consume(b',')?;
        let name = decode_enum(c, "IfcSiUnitName")?;
        Ok(Self {
            line_idx: 0,
            dimensions,
            unit_type,
            prefix,
            name,
        })
    }
}
impl RootEntity for IfcSiUnit {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn line_idx(&self) -> u64 {
        self.line_idx
    }
    fn set_line_idx(&mut self, idx: u64) {
        self.line_idx = idx;
    }
    fn resolve(&mut self, index: &PlaceholderIndex) {
        self.dimensions.resolve(index);
    }
    fn write(&self, _ctx: &WriteContext, container: &Container, out: &mut String) {
        write_reference(out, &self.dimensions, container);
        out.push(',');
        write_enum(out, format!("{:?}", self.unit_type).as_str());
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct IfcBuildingElementProxy {
    line_idx: u64,
    pub global_id: String,
    pub owner_history: Reference<IfcOwnerHistory>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub object_type: Option<String>,
    pub object_placement: Option<Reference<IfcBuildingElementProxy>>,
    pub representation: Option<Reference<IfcBuildingElementProxy>>,
    pub tag: Option<String>,
    pub composition_type: Option<String>,
}
impl DecodeEntity for IfcBuildingElementProxy {
    const NAME: &'static str = "IFCBUILDINGELEMENTPROXY";
    fn decode(c: &mut express_step::Cursor) -> Result<Self, ParseError> {
        let global_id = decode_string(c)?;
        c.consume(b',')?;
        let owner_history = decode_reference(c)?;
        c.consume(b',')?;
        let name = decode_optional(c, decode_string)?;
        c.consume(b',')?;
        let description = decode_optional(c, decode_string)?;
        c.consume(b',')?;
        let object_type = decode_optional(c, decode_string)?;
        c.consume(b',')?;
        let object_placement = decode_optional_reference(c)?;
        c.consume(b',')?;
        let representation = decode_optional_reference(c)?;
        c.consume(b',')?;
        let tag = decode_optional(c, decode_string)?;
        c.consume(b',')?;
        let composition_type = decode_optional(c, decode_string)?;
        Ok(Self {
            line_idx: 0,
            global_id,
            owner_history,
            name,
            description,
            object_type,
            object_placement,
            representation,
            tag,
            composition_type,
        })
    }
}
impl RootEntity for IfcBuildingElementProxy {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn line_idx(&self) -> u64 {
        self.line_idx
    }
    fn set_line_idx(&mut self, idx: u64) {
        self.line_idx = idx;
    }
    fn resolve(&mut self, index: &PlaceholderIndex) {
        self.owner_history.resolve(index);
        if let Some(r) = &mut self.object_placement {
            r.resolve(index);
        }
        if let Some(r) = &mut self.representation {
            r.resolve(index);
        }
    }
    fn write(&self, _ctx: &WriteContext, container: &Container, out: &mut String) {
        write_string(out, &self.global_id);
        out.push(',');
        write_reference(out, &self.owner_history, container);
        out.push(',');
        match &self.name {
            Some(s) => write_string(out, s),
            None => out.push('$'),
        }
        out.push(',');
        match &self.description {
            Some(s) => write_string(out, s),
            None => out.push('$'),
        }
        out.push(',');
        match &self.object_type {
            Some(s) => write_string(out, s),
            None => out.push('$'),
        }
        out.push(',');
        match &self.object_placement {
            Some(r) => write_reference(out, r, container),
            None => out.push('$'),
        }
        out.push(',');
        match &self.representation {
            Some(r) => write_reference(out, r, container),
            None => out.push('$'),
        }
        out.push(',');
        match &self.tag {
            Some(s) => write_string(out, s),
            None => out.push('$'),
        }
        out.push(',');
        match &self.composition_type {
            Some(s) => write_string(out, s),
            None => out.push('$'),
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct IfcShapeRepresentation {
    line_idx: u64,
    pub context_of_items: Reference<IfcShapeRepresentation>,
    pub representation_identifier: Option<String>,
    pub representation_type: Option<String>,
    pub items: Vec<Reference<IfcCartesianPoint>>,
}
impl DecodeEntity for IfcShapeRepresentation {
    const NAME: &'static str = "IFCSHAPEREPRESENTATION";
    fn decode(c: &mut express_step::Cursor) -> Result<Self, ParseError> {
        let context_of_items = decode_reference(c)?;
        c.consume(b',')?;
        let representation_identifier = decode_optional(c, decode_string)?;
        c.consume(b',')?;
        let representation_type = decode_optional(c, decode_string)?;
        c.consume(b',')?;
        let items = decode_list(c, decode_reference_placeholder)?
            .into_iter()
            .map(Reference::placeholder)
            .collect();
        Ok(Self {
            line_idx: 0,
            context_of_items,
            representation_identifier,
            representation_type,
            items,
        })
    }
}
impl RootEntity for IfcShapeRepresentation {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn line_idx(&self) -> u64 {
        self.line_idx
    }
    fn set_line_idx(&mut self, idx: u64) {
        self.line_idx = idx;
    }
    fn resolve(&mut self, index: &PlaceholderIndex) {
        self.context_of_items.resolve(index);
        for item in &mut self.items {
            item.resolve(index);
        }
    }
    fn write(&self, _ctx: &WriteContext, container: &Container, out: &mut String) {
        write_reference(out, &self.context_of_items, container);
        out.push(',');
        match &self.representation_identifier {
            Some(s) => write_string(out, s),
            None => out.push('$'),
        }
        out.push(',');
        match &self.representation_type {
            Some(s) => write_string(out, s),
            None => out.push('$'),
        }
        out.push(',');
        write_list(out, &self.items, |out, r| write_reference(out, r, container));
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `IfcValue` collapses the two-level `IfcValue = SELECT(IfcMeasureValue, ...)` /
/// `IfcMeasureValue = SELECT(IfcPositiveLengthMeasure, ...)` nesting the way Part 21 does:
/// the wrapper keyword names the leaf branch directly, never the intermediate select.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureValue {
    PositiveLength(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IfcValue {
    Measure(MeasureValue),
}

impl IfcValue {
    pub fn decode(c: &mut express_step::Cursor) -> Result<Self, ParseError> {
        let branch = decode_typed_wrapper_name(c)?;
        let value = match branch.as_str() {
            "IFCPOSITIVELENGTHMEASURE" => {
                IfcValue::Measure(MeasureValue::PositiveLength(c.parse_real()?))
            }
            other => {
                return Err(ParseError::UnknownSelectBranch {
                    select_name: "IfcValue",
                    branch: other.to_string(),
                })
            }
        };
        c.consume(b')')?;
        Ok(value)
    }
}
