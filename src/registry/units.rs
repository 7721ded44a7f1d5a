use super::UnitDef;

macro_rules! unit {
    ($id:expr, $to_meter:expr, $name:expr) => {
        UnitDef {
            id: $id,
            to_meter: $to_meter,
            name: $name,
        }
    };
}

pub static UNITS: &[UnitDef] = &[
    unit!("km", "1000.0", "Kilometer"),
    unit!("m", "1.0", "Meter"),
    unit!("dm", "1/10", "Decimeter"),
    unit!("cm", "1/100", "Centimeter"),
    unit!("mm", "1/1000", "Millimeter"),
    unit!("kmi", "1852.0", "International Nautical Mile"),
    unit!("in", "0.0254", "International Inch"),
    unit!("ft", "0.3048", "International Foot"),
    unit!("yd", "0.9144", "International Yard"),
    unit!("mi", "1609.344", "International Statute Mile"),
    unit!("fath", "1.8288", "International Fathom"),
    unit!("ch", "20.1168", "International Chain"),
    unit!("link", "0.201168", "International Link"),
    unit!("us-in", "1/39.37", "U.S. Surveyor's Inch"),
    unit!("us-ft", "1200/3937", "U.S. Surveyor's Foot"),
    unit!("us-yd", "3600/3937", "U.S. Surveyor's Yard"),
    unit!("us-ch", "79200/3937", "U.S. Surveyor's Chain"),
    unit!("us-mi", "6336000/3937", "U.S. Surveyor's Statute Mile"),
    unit!("ind-yd", "0.91439523", "Indian Yard"),
    unit!("ind-ft", "0.30479841", "Indian Foot"),
    unit!("ind-ch", "20.11669506", "Indian Chain"),
];
