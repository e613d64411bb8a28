//! 类别目录
//!
//! 全部设备类别的静态声明。声明顺序即报告分区顺序。

use crate::{AttributeSchema, CompositeSpec, FieldShape, FieldSpec, ValueKind};

const TEXT: FieldShape = FieldShape::Scalar(ValueKind::Text);

const fn number(unit: Option<&'static str>) -> FieldShape {
    FieldShape::Scalar(ValueKind::Number { unit })
}

const fn options(options: &'static [&'static str]) -> FieldShape {
    FieldShape::Scalar(ValueKind::Enum { options })
}

static PV_MODULE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "power_wp",
        label: "Power",
        shape: number(Some("Wp")),
    },
    FieldSpec {
        key: "technology",
        label: "Technology",
        shape: options(&["mono", "poly", "thin-film"]),
    },
    FieldSpec {
        key: "tilt_deg",
        label: "Tilt",
        shape: number(Some("°")),
    },
    FieldSpec {
        key: "azimuth",
        label: "Azimuth",
        shape: TEXT,
    },
    FieldSpec {
        key: "mounting",
        label: "Mounting",
        shape: TEXT,
    },
];

static INVERTER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "serial",
        label: "Serial Number",
        shape: TEXT,
    },
    FieldSpec {
        key: "rated_kw",
        label: "Rated Power",
        shape: number(Some("kW")),
    },
    FieldSpec {
        key: "mppt_count",
        label: "MPPT Count",
        shape: number(None),
    },
    FieldSpec {
        key: "strings_per_mppt",
        label: "Strings per MPPT",
        shape: number(None),
    },
    FieldSpec {
        key: "firmware",
        label: "Firmware",
        shape: TEXT,
    },
    FieldSpec {
        key: "breaker_rating",
        label: "Breaker Rating",
        shape: number(Some("A")),
    },
    FieldSpec {
        key: "dc_cable_section",
        label: "DC Cable Section",
        shape: number(Some("mm²")),
    },
];

static PROTECTION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "circuit_breaker",
        label: "Circuit Breaker",
        shape: FieldShape::Composite(CompositeSpec {
            base_key: "circuit_breaker",
            alias_keys: &["circuit_breaker_brand", "circuit_breaker_model"],
            sub_key: "circuit_breaker_rated_current",
            sub_label: "Rated",
            sub_unit: "A",
        }),
    },
    FieldSpec {
        key: "differential",
        label: "Differential",
        shape: FieldShape::Composite(CompositeSpec {
            base_key: "differential",
            alias_keys: &["differential_brand", "differential_model"],
            sub_key: "differential_sensitivity",
            sub_label: "Sensitivity",
            sub_unit: "mA",
        }),
    },
    FieldSpec {
        key: "spd_type",
        label: "SPD Type",
        shape: TEXT,
    },
    FieldSpec {
        key: "ac_cable_section",
        label: "AC Cable Section",
        shape: number(Some("mm²")),
    },
    FieldSpec {
        key: "earth_resistance",
        label: "Earth Resistance",
        shape: number(Some("Ω")),
    },
];

static ENERGY_METER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "serial",
        label: "Serial Number",
        shape: TEXT,
    },
    FieldSpec {
        key: "protocol",
        label: "Protocol",
        shape: options(&["modbus-rtu", "modbus-tcp", "dlms", "pulse"]),
    },
    FieldSpec {
        key: "ct_ratio",
        label: "CT Ratio",
        shape: TEXT,
    },
    FieldSpec {
        key: "register_point",
        label: "Register Point",
        shape: TEXT,
    },
];

static TELEMETRY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "serial",
        label: "Serial Number",
        shape: TEXT,
    },
    FieldSpec {
        key: "link_type",
        label: "Link",
        shape: options(&["ethernet", "gprs", "wifi", "rs485"]),
    },
    FieldSpec {
        key: "sim_iccid",
        label: "SIM",
        shape: TEXT,
    },
    FieldSpec {
        key: "endpoint",
        label: "Endpoint",
        shape: TEXT,
    },
];

static PUNCH_ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "severity",
        label: "Severity",
        shape: options(&["low", "medium", "high", "critical"]),
    },
    FieldSpec {
        key: "raised_on",
        label: "Raised",
        shape: TEXT,
    },
    FieldSpec {
        key: "due_on",
        label: "Due",
        shape: TEXT,
    },
    FieldSpec {
        key: "assignee",
        label: "Assignee",
        shape: TEXT,
    },
    FieldSpec {
        key: "resolution",
        label: "Resolution",
        shape: TEXT,
    },
];

static NOTE_FIELDS: &[FieldSpec] = &[FieldSpec {
    key: "text",
    label: "Note",
    shape: TEXT,
}];

/// 全部类别声明（声明顺序即报告分区顺序）。
pub static SCHEMAS: &[AttributeSchema] = &[
    AttributeSchema {
        category: "pv_module",
        section: "pv_modules",
        title: "PV Modules",
        fields: PV_MODULE_FIELDS,
    },
    AttributeSchema {
        category: "inverter",
        section: "inverters",
        title: "Inverters",
        fields: INVERTER_FIELDS,
    },
    AttributeSchema {
        category: "protection",
        section: "protection",
        title: "Protection",
        fields: PROTECTION_FIELDS,
    },
    AttributeSchema {
        category: "energy_meter",
        section: "meters",
        title: "Energy Meters",
        fields: ENERGY_METER_FIELDS,
    },
    AttributeSchema {
        category: "telemetry",
        section: "telemetry",
        title: "Telemetry",
        fields: TELEMETRY_FIELDS,
    },
    AttributeSchema {
        category: "punch_item",
        section: "punch_list",
        title: "Punch List",
        fields: PUNCH_ITEM_FIELDS,
    },
    AttributeSchema {
        category: "note",
        section: "notes",
        title: "Notes",
        fields: NOTE_FIELDS,
    },
];

/// 查找指定类别的属性模式。
pub fn schema_for(category: &str) -> Option<&'static AttributeSchema> {
    SCHEMAS.iter().find(|schema| schema.category == category)
}

/// 全部类别声明，按分区顺序。
pub fn schemas() -> &'static [AttributeSchema] {
    SCHEMAS
}
