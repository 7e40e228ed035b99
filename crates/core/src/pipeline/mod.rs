pub mod classify_face_use_case;
