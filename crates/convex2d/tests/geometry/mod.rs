mod polygon_shape_box;
mod polygon_shape_vertices;
