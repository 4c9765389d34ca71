//! Table rendering with position-dependent cell styling.

use crate::ast::{InlineContent, Node};
use crate::element::{TableCell, TableElement, TableRow, UiElement};
use crate::error::RenderError;
use crate::rules::{Output, RenderState};
use crate::style::{StyleProp, StyleSlot, Styles};

/// Where a cell sits. All values are 1-based; row 1 is the header.
///
/// `column_count` is the length of the cell's own row, so ragged body rows
/// classify their last cell correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
    pub row_count: usize,
    pub column_count: usize,
}

/// Slots composed for one cell, in composition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSlots {
    pub cell: Vec<StyleSlot>,
    pub content: Vec<StyleSlot>,
}

impl CellSlots {
    fn push(&mut self, cell: StyleSlot, content: StyleSlot) {
        self.cell.push(cell);
        self.content.push(content);
    }
}

/// Base, row parity, column parity, then header or last row, then last
/// column. Later slots win when the host merges them.
pub fn cell_slots(position: CellPosition) -> CellSlots {
    let mut slots = CellSlots {
        cell: vec![StyleSlot::TableCell],
        content: vec![StyleSlot::TableCellContent],
    };

    if position.row % 2 == 0 {
        slots.push(StyleSlot::TableCellEvenRow, StyleSlot::TableCellContentEvenRow);
    } else {
        slots.push(StyleSlot::TableCellOddRow, StyleSlot::TableCellContentOddRow);
    }

    if position.column % 2 == 0 {
        slots.push(
            StyleSlot::TableCellEvenColumn,
            StyleSlot::TableCellContentEvenColumn,
        );
    } else {
        slots.push(
            StyleSlot::TableCellOddColumn,
            StyleSlot::TableCellContentOddColumn,
        );
    }

    if position.row == 1 {
        slots.push(StyleSlot::TableHeaderCell, StyleSlot::TableHeaderCellContent);
    } else if position.row == position.row_count {
        slots.push(StyleSlot::TableCellLastRow, StyleSlot::TableCellContentLastRow);
    }

    if position.column == position.column_count {
        slots.push(
            StyleSlot::TableCellLastColumn,
            StyleSlot::TableCellContentLastColumn,
        );
    }

    slots
}

fn render_row(
    cells: &[InlineContent],
    row: usize,
    row_count: usize,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<TableRow, RenderError> {
    let cells = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let column = i + 1;
            let slots = cell_slots(CellPosition {
                row,
                column,
                row_count,
                column_count: cells.len(),
            });
            // Font properties of the content slots feed the cascade and
            // are never handed to the host.
            let (_, context) = state.font.resolve_container(&styles.flatten(&slots.content));
            let cell_state = match context {
                Some(context) => state.with_key(column).with_font(context),
                None => state.with_key(column),
            };
            let text_style = styles
                .compose(&slots.content)
                .into_iter()
                .map(|style| style.without(&StyleProp::FONT))
                .filter(|style| !style.is_empty())
                .collect();
            Ok(TableCell {
                key: column.to_string(),
                row,
                column,
                style: styles.compose(&slots.cell),
                text_style,
                content: output.render_content(cell, &cell_state)?,
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    Ok(TableRow {
        key: row.to_string(),
        row,
        cells,
    })
}

pub(super) fn render_table(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    let mut rows = Vec::new();

    if let Node::Table(table) = node {
        let row_count = table.cells.len() + 1;
        rows.push(render_row(&table.header, 1, row_count, output, state, styles)?);
        for (i, cells) in table.cells.iter().enumerate() {
            rows.push(render_row(cells, i + 2, row_count, output, state, styles)?);
        }
    }

    Ok(UiElement::Table(TableElement {
        key: state.key.clone(),
        border_style: styles.get(&StyleSlot::Table).cloned(),
        rows,
    }))
}
