use super::DescriptorGroup;

fn group(dimension: &str, sector: &str, levels: [&str; 5]) -> DescriptorGroup {
    DescriptorGroup {
        dimension: dimension.to_string(),
        sector: sector.to_string(),
        levels: levels.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn ladders() -> Vec<DescriptorGroup> {
    let logistics_commitment = [
        "Leaders treat Lean as a warehouse-floor initiative owned by consultants.",
        "Site managers sponsor pilot projects in single docks or shifts.",
        "Leadership reviews flow and OTIF metrics weekly and removes blockers.",
        "Leaders coach supervisors through daily tiered meetings across all sites.",
        "Lean thinking drives network design and carrier partnerships.",
    ];

    vec![
        group(
            "Leadership Commitment",
            "Healthcare",
            [
                "Lean is delegated to a quality office with little executive involvement.",
                "Executives sponsor isolated improvement projects in single units.",
                "Leadership rounds regularly on wards and follows up on patient-flow issues.",
                "Leaders coach unit managers using A3 thinking and huddle boards.",
                "Lean principles shape the hospital strategy and clinical governance.",
            ],
        ),
        group("Leadership Commitment", "Logistics", logistics_commitment),
        // 原始数据中该组出现了两次
        group("Leadership Commitment", "Logistics", logistics_commitment),
        group(
            "Leadership Commitment",
            "Manufacturing",
            [
                "Management focuses on output targets; Lean is seen as cost cutting.",
                "Plant management launches kaizen events in selected lines.",
                "Managers walk the gemba daily and respond to andon calls.",
                "Leaders develop problem solvers through structured coaching cycles.",
                "Lean is the management system from the boardroom to the shop floor.",
            ],
        ),
        group(
            "Standard Work",
            "Healthcare",
            [
                "Clinical tasks depend on individual habits and memory.",
                "Protocols exist for critical procedures but are rarely updated.",
                "Standard work covers key nursing and admission routines.",
                "Standards are reviewed after every incident and audited monthly.",
                "Staff improve standards themselves; variation is the exception.",
            ],
        ),
        group(
            "Standard Work",
            "Manufacturing",
            [
                "Operators follow tribal knowledge; output varies by shift.",
                "Work instructions exist for some stations.",
                "Standard work combination sheets are posted at every station.",
                "Layered process audits verify adherence daily.",
                "Standards are the baseline for every kaizen and updated continuously.",
            ],
        ),
        group(
            "Value Stream Mapping",
            "Logistics",
            [
                "No view of end-to-end order flow.",
                "Current-state maps exist for a single product family.",
                "Future-state maps drive a prioritised improvement plan.",
                "Value streams are reviewed quarterly with customers and carriers.",
                "The organisation is structured around its value streams.",
            ],
        ),
        group(
            "5S Workplace Organization",
            "Manufacturing",
            [
                "Work areas are cluttered; tools are searched for daily.",
                "Red-tag campaigns have been run in pilot areas.",
                "Shadow boards and floor markings are in place plant-wide.",
                "5S audits are scored weekly and trends are visible.",
                "5S is self-sustained by teams and extends to offices.",
            ],
        ),
    ]
}
