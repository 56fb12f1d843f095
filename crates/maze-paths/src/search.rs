use maze_core::{Point, WallGrid, encode_cell};

use crate::error::SearchError;
use crate::frontier::{Entry, Frontier};
use crate::mode::Mode;
use crate::path::Path;

/// Parent index of the entrance node.
const ROOT: usize = usize::MAX;

/// Expansion order: left, up, right, down.
const DIRS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
];

/// A discovered cell. Nodes live in an arena owned by one search; `parent`
/// indexes into that arena.
#[derive(Clone, Copy, Debug)]
struct Node {
    pos: Point,
    steps: u32,
    parent: usize,
}

/// Find a path from `entrance` to the first exit-row cell popped from the
/// frontier under `mode`'s ordering.
///
/// Fails with [`SearchError::MultipleExits`] as soon as a second column
/// leads down into the exit row, and with [`SearchError::NoSolution`] when
/// the exit row cannot be reached.
///
/// A cell is marked explored when popped, but only neighbours are filtered
/// on it. A cell queued twice before its first pop is expanded again on the
/// second pop, with that copy's parent, so the frontier can grow well past
/// W·H entries: an open 27x99 grid under [`Mode::Longest`] takes about
/// 124k pops.
pub fn find_path(grid: &WallGrid, entrance: Point, mode: Mode) -> Result<Path, SearchError> {
    if !grid.is_open(entrance) {
        return Err(SearchError::InvalidEntrance(entrance));
    }

    let dims = grid.dims();
    let width = dims.width as usize;
    let exit_row = dims.exit_row();
    let idx = |p: Point| (p.y as usize) * width + (p.x as usize);

    let mut nodes: Vec<Node> = Vec::with_capacity(dims.len());
    let mut explored = vec![false; dims.len()];
    let mut frontier = Frontier::new(mode.comparator());
    // Column through which the exit row was first entered.
    let mut exit_column: Option<i32> = None;

    nodes.push(Node {
        pos: entrance,
        steps: 0,
        parent: ROOT,
    });
    frontier.push(Entry {
        node: 0,
        y: entrance.y,
        steps: 0,
    });

    let solution = 'search: loop {
        let Some(current) = frontier.pop() else {
            break 'search None;
        };

        let ci = current.node;
        let Node { pos, steps, .. } = nodes[ci];
        explored[idx(pos)] = true;
        log::trace!("{mode}: expand {} (steps {steps})", encode_cell(pos));

        if pos.y == exit_row {
            break 'search Some(ci);
        }

        for d in DIRS {
            let np = pos + d;
            if !grid.is_open(np) || explored[idx(np)] {
                continue;
            }

            if np.y == exit_row && d.y == 1 {
                if let Some(first) = exit_column.filter(|&x| x != pos.x) {
                    log::debug!(
                        "{mode}: exit row entered from columns {} and {}",
                        encode_cell(Point::new(first, 0)),
                        encode_cell(Point::new(pos.x, 0)),
                    );
                    return Err(SearchError::MultipleExits {
                        first,
                        second: pos.x,
                    });
                }
                exit_column = Some(pos.x);
            }

            nodes.push(Node {
                pos: np,
                steps: steps + 1,
                parent: ci,
            });
            frontier.push(Entry {
                node: nodes.len() - 1,
                y: np.y,
                steps: steps + 1,
            });
        }
    };

    let Some(mut ci) = solution else {
        log::debug!("{mode}: no path after discovering {} nodes", nodes.len());
        return Err(SearchError::NoSolution);
    };

    // Reconstruct path.
    let mut cells = Vec::with_capacity(nodes[ci].steps as usize + 1);
    while ci != ROOT {
        cells.push(nodes[ci].pos);
        ci = nodes[ci].parent;
    }
    cells.reverse();

    let path = Path::from_trace(cells);
    log::debug!(
        "{mode}: reached {} in {} steps ({} nodes discovered, {} left in frontier)",
        encode_cell(path.exit()),
        path.steps(),
        nodes.len(),
        frontier.len(),
    );
    Ok(path)
}
