pub const ROOT_STYLE: &str =
    "height: 100vh; display: flex; flex-direction: column; font-family: sans-serif; margin: 0;";
pub const HEADER_STYLE: &str = "background: #222; color: #fff; padding: 12px 20px;";
pub const PANEL_STYLE: &str =
    "display: flex; gap: 16px; align-items: center; flex-wrap: wrap; padding: 8px 20px;";
pub const ERROR_BANNER_STYLE: &str =
    "margin: 0 20px 8px; padding: 8px 12px; border: 1px solid #d24; background: #fdecee; color: #a12;";
pub const TABLE_STYLE: &str = "border-collapse: collapse; width: 100%; background: #fff;";
pub const TABLE_BODY_CELL_STYLE: &str = "border: 1px solid #bbb; padding: 4px;";
pub const PAGER_LIST_STYLE: &str = "display: flex; list-style: none; gap: 4px; margin: 0; padding: 0;";

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; padding: 0 20px 20px;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    format!(
        "position: sticky; top: 0; z-index: 1; background: #f3f3f3; border: 1px solid #bbb; padding: 6px; text-align: left; white-space: nowrap;{}",
        if sortable { " cursor: pointer;" } else { "" }
    )
}

pub fn pager_item_style(active: bool, disabled: bool) -> String {
    let state = if active {
        "background: #337ab7; color: #fff; border-color: #337ab7; cursor: default;"
    } else if disabled {
        "color: #aaa; cursor: not-allowed;"
    } else {
        "cursor: pointer;"
    };
    format!("border: 1px solid #ddd; border-radius: 4px; padding: 4px 10px; {state}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_header_styles_include_positioning() {
        let style = table_header_cell_style(true);
        assert!(style.contains("position: sticky"));
        assert!(style.contains("cursor: pointer"));
        assert!(!table_header_cell_style(false).contains("cursor: pointer"));
    }

    #[test]
    fn pager_item_style_reflects_state() {
        assert!(pager_item_style(true, false).contains("#337ab7"));
        assert!(pager_item_style(false, true).contains("not-allowed"));
        assert!(pager_item_style(false, false).contains("cursor: pointer"));
    }

    #[test]
    fn table_container_style_allows_scroll() {
        assert!(table_container_style().contains("overflow: auto"));
    }
}
